//! JWT 액세스 토큰 서비스
//!
//! HMAC-SHA256(HS256) 서명으로 액세스 토큰을 발급하고 검증합니다.
//! 리프레시 토큰은 발급하지 않으며, 로그아웃은 `jti` 폐기 목록으로 처리합니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use uuid::Uuid;
use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Account;
use crate::domain::models::token::{IssuedToken, TokenClaims};

/// JWT 토큰 관리 서비스
///
/// 서명 키와 만료 시간은 호출 시점마다 [`JwtConfig`] 에서 읽습니다.
#[service(name = "token")]
pub struct TokenService {}

impl TokenService {
    /// 계정에 대한 액세스 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let issued = TokenService::instance().issue(&account)?;
    /// println!("expires in {}s", issued.expires_in);
    /// ```
    pub fn issue(&self, account: &Account) -> AppResult<IssuedToken> {
        let (claims, lifetime) = claims_for(account, Utc::now(), JwtConfig::expiration_minutes())?;
        let token_id = claims.jti.clone();

        let secret = JwtConfig::secret();
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))?;

        Ok(IssuedToken {
            token,
            token_id,
            expires_in: lifetime.num_seconds(),
        })
    }

    /// 토큰 서명과 유효기간을 검증하고 클레임을 반환합니다.
    ///
    /// 만료, 서명 불일치, 형식 오류 모두 `AuthenticationError` 입니다.
    pub fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        let secret = JwtConfig::secret();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_nbf = true;

        decode::<TokenClaims>(token, &DecodingKey::from_secret(secret.as_ref()), &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
            })
    }

    /// "Bearer {token}" 형식의 Authorization 헤더에서 토큰 부분만 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())
            })
    }
}

/// 발급 시각과 수명(분)으로 클레임을 만듭니다.
///
/// 수명이 `DateTime` 범위를 넘으면 `InternalError` 입니다.
fn claims_for(account: &Account, now: DateTime<Utc>, minutes: i64) -> AppResult<(TokenClaims, Duration)> {
    let expires_at = Duration::try_minutes(minutes)
        .and_then(|lifetime| now.checked_add_signed(lifetime).map(|at| (lifetime, at)));
    let Some((lifetime, expires_at)) = expires_at else {
        return Err(AppError::InternalError(format!("토큰 수명이 범위를 벗어났습니다: {}분", minutes)));
    };

    let claims = TokenClaims {
        sub: account.id.to_string(),
        role: account.role,
        jti: Uuid::new_v4().to_string(),
        iat: now.timestamp(),
        nbf: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    Ok((claims, lifetime))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;
    use crate::domain::entities::{NewAccount, Role};

    fn account(role: Role) -> Account {
        Account::new(NewAccount {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password_hash: "$2b$04$digest".to_string(),
            role,
            provider: AuthProvider::Local,
            photo: None,
            verified: true,
        })
    }

    fn sign(claims: &TokenClaims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_then_verify_carries_identity() {
        let service = TokenService::instance();
        let admin = account(Role::Admin);

        let issued = service.issue(&admin).unwrap();
        let claims = service.verify(&issued.token).unwrap();

        assert_eq!(claims.sub, admin.id.to_string());
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.jti, issued.token_id);
        assert_eq!(claims.exp - claims.iat, issued.expires_in);
    }

    #[test]
    fn test_claims_lifetime() {
        let now = Utc::now();
        let ann = account(Role::User);

        let (claims, lifetime) = claims_for(&ann, now, 90).unwrap();
        assert_eq!(lifetime.num_seconds(), 5400);
        assert_eq!(claims.exp - claims.iat, 5400);

        assert!(matches!(
            claims_for(&ann, now, i64::MAX),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn test_each_token_has_unique_id() {
        let service = TokenService::instance();
        let ann = account(Role::User);

        let first = service.issue(&ann).unwrap();
        let second = service.issue(&ann).unwrap();

        assert_ne!(first.token_id, second.token_id);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: Uuid::new_v4().to_string(),
            role: Role::User,
            jti: Uuid::new_v4().to_string(),
            iat: now - 7200,
            nbf: now - 7200,
            exp: now - 3600,
        };
        let token = sign(&claims, &JwtConfig::secret());

        let result = TokenService::instance().verify(&token);

        assert!(matches!(result, Err(AppError::AuthenticationError(msg)) if msg.contains("만료")));
    }

    #[test]
    fn test_foreign_signature_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: Uuid::new_v4().to_string(),
            role: Role::Admin,
            jti: Uuid::new_v4().to_string(),
            iat: now,
            nbf: now,
            exp: now + 600,
        };
        let token = sign(&claims, "some-other-secret");

        let result = TokenService::instance().verify(&token);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let result = TokenService::instance().verify("not.a.jwt");

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::instance();

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}

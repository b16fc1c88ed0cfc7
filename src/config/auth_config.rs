//! 인증 관련 설정 관리 모듈
//!
//! JWT 서명/만료 설정과 계정 출처(인증 공급자) 열거형을 제공합니다.

use std::env;
use serde::{Deserialize, Serialize};

/// JWT 토큰 설정을 관리하는 구조체
///
/// ## 권장 설정값
///
/// - **개발**: 액세스 토큰 24시간
/// - **프로덕션**: 액세스 토큰 60분
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며 경고 로그를 남깁니다.
    ///
    /// ```bash
    /// # 안전한 JWT 키 생성
    /// openssl rand -base64 32
    /// export JWT_SECRET="your-super-secret-256-bit-key-generated-securely"
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// 액세스 토큰의 만료 시간(분)
    ///
    /// `JWT_EXPIRATION_MINUTES`, 기본값 60분, 최대 [`Self::MAX_LIFETIME_MINUTES`]
    pub fn expiration_minutes() -> i64 {
        lifetime_minutes(env::var("JWT_EXPIRATION_MINUTES").ok())
    }

    /// 로그인 시 설정하는 `token` 쿠키의 수명(분)
    ///
    /// `JWT_MAXAGE`, 기본값 60분, 최대 [`Self::MAX_LIFETIME_MINUTES`]
    pub fn cookie_max_age_minutes() -> i64 {
        lifetime_minutes(env::var("JWT_MAXAGE").ok())
    }

    /// 토큰/쿠키 수명의 상한 (30일)
    pub const MAX_LIFETIME_MINUTES: i64 = 30 * 24 * 60;
}

/// 분 단위 수명 해석. 0 이하나 해석 불가는 60분, 상한을 넘으면 상한으로 맞춥니다.
fn lifetime_minutes(raw: Option<String>) -> i64 {
    let minutes = raw
        .and_then(|minutes| minutes.trim().parse::<i64>().ok())
        .filter(|minutes| *minutes > 0)
        .unwrap_or(60);

    if minutes > JwtConfig::MAX_LIFETIME_MINUTES {
        log::warn!(
            "⚠️ 토큰 수명 {}분이 상한을 넘어 {}분으로 제한합니다",
            minutes,
            JwtConfig::MAX_LIFETIME_MINUTES
        );
    }
    minutes.min(JwtConfig::MAX_LIFETIME_MINUTES)
}

/// 계정의 출처(인증 공급자)
///
/// 로컬 계정만 비밀번호로 로그인할 수 있습니다. Google/Facebook 값은
/// 외부 공급자로부터 들어온 계정을 표시하는 데이터로만 사용됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// 로컬 이메일/패스워드 인증
    Local,

    /// Google 계정
    Google,

    /// Facebook 계정
    Facebook,
}

impl AuthProvider {
    /// 문자열에서 AuthProvider를 생성합니다. (대소문자 무관)
    ///
    /// ```rust,ignore
    /// assert_eq!(AuthProvider::from_str("google")?, AuthProvider::Google);
    /// assert!(AuthProvider::from_str("twitter").is_err());
    /// ```
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            "facebook" => Ok(AuthProvider::Facebook),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    /// 저장소와 API에서 사용하는 소문자 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
            AuthProvider::Facebook => "facebook",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_from_string() {
        assert_eq!(AuthProvider::from_str("local").unwrap(), AuthProvider::Local);
        assert_eq!(AuthProvider::from_str("google").unwrap(), AuthProvider::Google);
        assert_eq!(AuthProvider::from_str("facebook").unwrap(), AuthProvider::Facebook);

        // 대소문자 무관 테스트
        assert_eq!(AuthProvider::from_str("GOOGLE").unwrap(), AuthProvider::Google);
        assert_eq!(AuthProvider::from_str(" Local ").unwrap(), AuthProvider::Local);

        // 지원하지 않는 프로바이더 테스트
        assert!(AuthProvider::from_str("github").is_err());
        assert!(AuthProvider::from_str("").is_err());
    }

    #[test]
    fn test_auth_provider_serializes_lowercase() {
        let json = serde_json::to_string(&AuthProvider::Facebook).unwrap();
        assert_eq!(json, "\"facebook\"");

        let parsed: AuthProvider = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(parsed, AuthProvider::Local);
    }

    #[test]
    fn test_lifetime_minutes_bounds() {
        let parse = |raw: &str| lifetime_minutes(Some(raw.to_string()));

        assert_eq!(lifetime_minutes(None), 60);
        assert_eq!(parse("15"), 15);
        assert_eq!(parse("0"), 60);
        assert_eq!(parse("-5"), 60);
        assert_eq!(parse("soon"), 60);
        assert_eq!(parse(&i64::MAX.to_string()), JwtConfig::MAX_LIFETIME_MINUTES);
    }

    #[test]
    fn test_jwt_defaults() {
        if env::var("JWT_EXPIRATION_MINUTES").is_err() {
            assert_eq!(JwtConfig::expiration_minutes(), 60);
        }
        if env::var("JWT_MAXAGE").is_err() {
            assert_eq!(JwtConfig::cookie_max_age_minutes(), 60);
        }
    }
}

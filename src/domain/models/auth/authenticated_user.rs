use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::errors::AppError;
use crate::domain::entities::Role;

/// JWT 토큰에서 추출된 사용자 정보
///
/// 인증 미들웨어가 Request Extensions 에 넣어 두고,
/// 핸들러는 인자로 선언해서 꺼내 씁니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 계정 ID (토큰의 `sub`)
    pub user_id: Uuid,

    pub role: Role,

    /// 토큰 고유 ID (`jti`), 로그아웃 시 폐기 대상
    pub token_id: String,

    /// 토큰 만료 시각 (Unix timestamp)
    pub expires_at: i64,
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn user(role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Uuid::new_v4(),
            role,
            token_id: Uuid::new_v4().to_string(),
            expires_at: 0,
        }
    }

    #[actix_web::test]
    async fn test_extractor_reads_request_extensions() {
        let expected = user(Role::User);
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(expected.clone());

        let extracted = AuthenticatedUser::extract(&req).await.unwrap();

        assert_eq!(extracted.user_id, expected.user_id);
    }

    #[actix_web::test]
    async fn test_extractor_fails_without_authentication() {
        let req = TestRequest::default().to_http_request();

        let result = AuthenticatedUser::extract(&req).await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }
}

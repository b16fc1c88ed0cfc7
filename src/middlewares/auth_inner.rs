//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::auth::{AuthenticatedUser, RequiredRole};
use crate::repositories::sessions::SessionRepository;
use crate::services::auth::TokenService;

/// 로그인 시 발급하는 인증 쿠키 이름
pub const TOKEN_COOKIE: &str = "token";

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let user = match authenticate_request(&req).await {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("인증 실패: {} {} - {}", req.method(), req.path(), err);
                    return Ok(reject(req, err));
                }
            };

            if let Some(ref required) = required_role {
                if !required.is_satisfied(user.role) {
                    log::warn!(
                        "권한 부족: 사용자 ID {} ({}), 필요 권한: {:?}",
                        user.user_id,
                        user.role.as_str(),
                        required
                    );
                    let err = AppError::AuthorizationError("접근 권한이 부족합니다".to_string());
                    return Ok(reject(req, err));
                }
            }

            log::debug!("인증 성공: 사용자 ID {}", user.user_id);
            req.extensions_mut().insert(user);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    let response = err.error_response();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

/// Authorization 헤더, 없으면 `token` 쿠키에서 토큰 문자열을 꺼냅니다.
fn extract_token(req: &ServiceRequest, token_service: &TokenService) -> AppResult<String> {
    if let Some(header) = req.headers().get("Authorization") {
        let header = header
            .to_str()
            .map_err(|_| AppError::AuthenticationError("유효하지 않은 인증 헤더입니다".to_string()))?;
        return token_service.extract_bearer_token(header).map(str::to_string);
    }

    req.cookie(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::AuthenticationError("인증 토큰이 없습니다".to_string()))
}

/// 요청에서 JWT 토큰을 추출하고 검증
///
/// 로그아웃으로 폐기된 토큰은 서명이 유효해도 거부합니다.
async fn authenticate_request(req: &ServiceRequest) -> AppResult<AuthenticatedUser> {
    let token_service = TokenService::instance();

    let token = extract_token(req, &token_service)?;
    let claims = token_service.verify(&token)?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()))?;

    if SessionRepository::instance().is_revoked(&claims.jti).await? {
        return Err(AppError::AuthenticationError("로그아웃된 토큰입니다".to_string()));
    }

    Ok(AuthenticatedUser {
        user_id,
        role: claims.role,
        token_id: claims.jti,
        expires_at: claims.exp,
    })
}

//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 로그아웃 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! # Token Delivery
//!
//! 로그인 성공 시 액세스 토큰을 응답 본문과 `token` 쿠키(HttpOnly) 양쪽으로 전달합니다.
//! 로그아웃은 토큰의 `jti` 를 남은 유효기간 동안 폐기 목록에 올리고 쿠키를 만료시킵니다.
use actix_web::cookie::{time, Cookie, SameSite};
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::config::{Environment, JwtConfig};
use crate::core::errors::AppError;
use crate::domain::dto::accounts::request::{validation_error, LoginRequest, RegisterRequest};
use crate::domain::dto::accounts::response::{AccountDataResponse, LoginResponse};
use crate::domain::dto::ApiResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::middlewares::{AuthMiddleware, TOKEN_COOKIE};
use crate::repositories::sessions::{remaining_ttl, SessionRepository};
use crate::services::accounts::AccountService;

/// 회원가입
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/register \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ann","email":"ann@example.com","password":"longpass1","passwordConfirm":"longpass1"}'
/// ```
#[post("/register")]
pub async fn register(
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(validation_error)?;

    let account = AccountService::instance()
        .register(payload.into_inner().into_registration())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        AccountDataResponse::from(account),
        "회원가입이 완료되었습니다",
    )))
}

/// 이메일/비밀번호 로그인
///
/// 운영 환경에서는 `token` 쿠키에 `Secure` 속성이 붙습니다.
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(validation_error)?;

    let (issued, account) = AccountService::instance()
        .authenticate(&payload.email, &payload.password)
        .await?;

    let cookie = Cookie::build(TOKEN_COOKIE, issued.token.clone())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(Environment::current().is_production())
        .max_age(time::Duration::minutes(JwtConfig::cookie_max_age_minutes()))
        .finish();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::ok(LoginResponse::new(issued, account))))
}

/// 로그아웃
///
/// 현재 토큰을 폐기하고 `token` 쿠키를 만료시킵니다.
#[get("/logout", wrap = "AuthMiddleware::required()")]
pub async fn logout(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    SessionRepository::instance()
        .revoke(&user.token_id, user.user_id, remaining_ttl(user.expires_at))
        .await?;

    let mut cookie = Cookie::build(TOKEN_COOKIE, "").path("/").finish();
    cookie.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::<()>::message("로그아웃되었습니다")))
}

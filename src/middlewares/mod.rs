//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! Spring Boot의 Filter와 Interceptor와 유사한 역할을 수행합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 헤더 또는 `token` 쿠키에서 JWT 추출 및 검증
//! - 로그아웃으로 폐기된 토큰 거부
//! - 역할 기반 접근 제어 (403)
//! - 사용자 정보를 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::domain::entities::Role;
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/users")
//!             .wrap(AuthMiddleware::required_with_role(Role::Admin))
//!             .service(handlers::accounts::create_account)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
pub use auth_inner::TOKEN_COOKIE;

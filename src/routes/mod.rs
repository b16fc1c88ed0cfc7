//! # Routes
//!
//! 애플리케이션의 모든 HTTP 라우트를 한 곳에서 등록합니다.
//! 인증 요구사항은 핸들러의 `wrap` 속성에 선언되어 있습니다.

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(health_check)
            .configure(configure_auth_routes)
            .configure(configure_account_routes),
    );
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/v1/auth/register` - 회원가입 (Public)
/// - `POST /api/v1/auth/login` - 이메일/비밀번호 로그인 (Public)
/// - `GET /api/v1/auth/logout` - 로그아웃 (인증 필요)
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"ann@example.com","password":"longpass1"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::logout),
    );
}

/// 계정 관련 라우트를 설정합니다
///
/// # Route Groups
///
/// ## 인증 필요
/// - `GET /api/v1/users/me` - 현재 계정
/// - `GET /api/v1/users` - 목록 (page, per_page, search, search_by, role, provider, verified, show_deleted)
/// - `GET /api/v1/users/stats` - 통계
/// - `GET /api/v1/users/{id}` - 단건 조회
///
/// ## 관리자 전용
/// - `POST /api/v1/users` - 계정 생성
/// - `PUT /api/v1/users/{id}` - 수정
/// - `DELETE /api/v1/users/{id}` - 소프트 삭제
/// - `PATCH /api/v1/users/{id}/restore` - 복구
/// - `DELETE /api/v1/users/{id}/permanent` - 영구 삭제
fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::accounts::get_me)
            .service(handlers::accounts::get_stats)
            .service(handlers::accounts::list_accounts)
            .service(handlers::accounts::create_account)
            .service(handlers::accounts::get_account)
            .service(handlers::accounts::update_account)
            .service(handlers::accounts::delete_account)
            .service(handlers::accounts::restore_account)
            .service(handlers::accounts::delete_account_permanently),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/api/v1/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "account_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "dependency_injection": "Singleton Macro"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/v1/health").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "account_service");
    }

    #[actix_web::test]
    async fn test_account_routes_require_authentication() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        for (method, uri) in [
            (actix_web::http::Method::GET, "/api/v1/users"),
            (actix_web::http::Method::GET, "/api/v1/users/me"),
            (actix_web::http::Method::GET, "/api/v1/users/stats"),
            (actix_web::http::Method::POST, "/api/v1/users"),
            (actix_web::http::Method::DELETE, "/api/v1/users/6f1c2b8e-0000-4000-8000-000000000000/permanent"),
        ] {
            let req = test::TestRequest::default().method(method.clone()).uri(uri).to_request();
            let res = test::call_service(&app, req).await;

            assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        }
    }
}

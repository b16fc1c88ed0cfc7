//! 계정 서비스 백엔드
//!
//! 계정 생명주기 관리와 JWT 인증을 제공하는 REST API 서비스입니다.
//! 싱글톤 매크로를 활용한 의존성 주입 구조 위에 구성되어 있습니다.
//!
//! # Features
//!
//! - **계정 관리**: 가입, 관리자 생성, 프로필 수정, 소프트 삭제/복구, 영구 삭제
//! - **목록 조회**: 필터, 허용 목록 기반 검색, 페이지네이션, 통계
//! - **JWT 인증**: HS256 액세스 토큰, Bearer 헤더 또는 `token` 쿠키
//! - **로그아웃**: Redis 기반 토큰 폐기 목록
//! - **싱글톤 DI**: `#[service]` / `#[repository]` 매크로 기반 자동 의존성 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/v1/auth, /api/v1/users
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AuthMiddleware  │ ← 토큰 검증, 역할 확인
//! │    Handlers     │ ← DTO 검증, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AccountService  │ ← 비즈니스 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  AccountStore   │ ← MongoDB (운영) / 메모리 (테스트)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_service::services::accounts::AccountService;
//! use account_service::domain::models::accounts::Registration;
//!
//! let accounts = AccountService::instance();
//!
//! let account = accounts.register(Registration {
//!     name: "Ann".to_string(),
//!     email: "ANN@Example.com".to_string(),
//!     password: "longpass1".to_string(),
//!     password_confirm: "longpass1".to_string(),
//!     photo: None,
//! }).await?;
//!
//! let (issued, _) = accounts.authenticate("ann@example.com", "longpass1").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

//! 계정 관리 서비스 모듈
//!
//! 가입, 로그인, 조회, 수정, 소프트 삭제/복구, 영구 삭제, 통계를 제공합니다.

pub mod account_service;

pub use account_service::{total_pages, AccountService};

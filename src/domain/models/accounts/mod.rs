//! 계정 서비스 입출력 모델
//!
//! HTTP DTO와 분리된 서비스 계층의 입력/출력 값 객체입니다.
//! 요청 DTO는 `into_*` 메서드로 이 타입들을 필드 단위로 생성합니다.

use serde::Serialize;
use crate::config::AuthProvider;
use crate::domain::entities::{Account, Role};

/// 회원가입 입력
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub photo: Option<String>,
}

/// 관리자 계정 생성 입력
///
/// `role` / `provider` 가 None 이면 `user` / `local` 이 사용됩니다.
#[derive(Debug, Clone)]
pub struct AccountDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
    pub provider: Option<AuthProvider>,
    pub photo: Option<String>,
    pub verified: bool,
}

/// 계정 수정 입력
#[derive(Debug, Clone)]
pub struct AccountChanges {
    pub name: String,
    /// 중복 검사에만 쓰이며 저장되지 않음
    pub email: String,
    /// None 이면 `user`
    pub role: Option<Role>,
    /// None 또는 빈 문자열이면 기본 이미지
    pub photo: Option<String>,
    /// None 이면 기존 값 유지
    pub verified: Option<bool>,
}

/// 목록 조회 결과 한 페이지
#[derive(Debug, Clone)]
pub struct AccountPage {
    pub items: Vec<Account>,
    /// 페이지네이션 이전의 전체 건수
    pub total: u64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: u64,
}

/// 계정 통계 (삭제된 계정 제외)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountStats {
    pub total_users: u64,
    pub verified_users: u64,
    pub admin_users: u64,
    pub regular_users: u64,
    pub unverified_users: u64,
}

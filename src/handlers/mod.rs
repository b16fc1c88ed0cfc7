//! # HTTP Handlers
//!
//! Spring의 `@RestController` 메서드에 해당하는 Actix-Web 핸들러들입니다.
//! 핸들러는 요청 DTO 형식 검증, 서비스 호출, 응답 DTO 변환만 담당하며
//! 비즈니스 규칙은 서비스 계층에 둡니다.
//!
//! - [`auth`] - 회원가입, 로그인, 로그아웃 (`/api/v1/auth`)
//! - [`accounts`] - 계정 조회/관리 (`/api/v1/users`)

pub mod auth;
pub mod accounts;

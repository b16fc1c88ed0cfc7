//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 계정 비즈니스 규칙에 쓰이는 타입들을 담습니다.
//! Spring Framework의 Domain Layer와 동일한 역할을 수행합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - Account, Role, AccountState
//! ├── DTOs          - HTTP 요청/응답 (Request/Response)
//! └── Models        - 서비스 입출력 값 객체, 인증 컨텍스트, 토큰 클레임
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 비즈니스 핵심 객체 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | Value Objects | `models` 모듈 | 서비스 입출력 |
//! | `@Valid` | `validator` 검증 | 요청 형태 검사 |
//!
//! ## 설계 원칙
//!
//! - 엔티티는 저장소 표현(BSON 문서)을 알지 못합니다. 변환은 리포지토리에서
//!   필드 단위로 명시적으로 수행합니다.
//! - 소프트 삭제는 nullable 타임스탬프가 아니라 `AccountState` 합 타입입니다.
//! - 비밀번호 해시는 응답 DTO로 변환되는 순간 제거됩니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Account, AccountState, Role};
pub use dto::ApiResponse;

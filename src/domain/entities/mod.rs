//! # Domain Entities
//!
//! 비즈니스의 핵심 개념을 나타내는 엔티티들입니다.
//! 저장소 표현(MongoDB 문서)과는 분리되어 있으며, 변환은 리포지토리 계층에서
//! 필드 단위로 명시적으로 수행합니다.
//!
//! ## 특징
//!
//! - **식별성**: 생성 시 할당되는 UUID v4
//! - **상태 모델링**: 소프트 삭제는 `AccountState::Deleted { at }` 로 표현
//! - **직렬화 분리**: 엔티티는 직접 직렬화되지 않고 응답 DTO로 변환됨

pub mod accounts;

pub use accounts::*;

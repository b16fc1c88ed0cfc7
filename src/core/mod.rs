//! # Core Framework Module
//!
//! 계정 서비스 전반에서 사용하는 핵심 프레임워크 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: Spring의 ApplicationContext + BeanFactory 역할
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스 등록
//! - **싱글톤 관리**: Thread-safe한 인스턴스 생명주기 관리
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 계정 서비스의 닫힌 에러 집합
//! - **ErrorKind**: 경계 계층이 완전 매칭하는 에러 종류 태그
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `@Component` | `#[service]` / `#[repository]` |
//! | `ApplicationContext` | `ServiceLocator` |
//! | `@Autowired` | `Arc<T>` 필드 자동 주입 |
//! | `@ExceptionHandler` | `AppError::error_response()` |
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceLocator;
//!
//! ServiceLocator::set(database);
//! ServiceLocator::set(redis);
//! ServiceLocator::initialize_all().await?;
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! ❌ Circular dependency detected for type: AccountService
//! ```
//! **해결**: 서비스 계층 구조를 재설계하여 단방향 의존성으로 변경
//!
//! ### 미등록 타입 에러
//! ```text
//! panic: Service not found: Database. Make sure it's registered...
//! ```
//! **해결**: `main`에서 `ServiceLocator::set()` 으로 인프라 컴포넌트를 먼저 등록

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;

//! # Account DTOs
//!
//! 계정 관련 요청/응답 DTO 모음입니다.
//!
//! ```text
//! dto/accounts/
//! ├── request/
//! │   ├── auth_request.rs     - RegisterRequest, LoginRequest
//! │   ├── account_request.rs  - CreateAccountRequest, UpdateAccountRequest
//! │   └── list_query.rs       - ListAccountsQuery, AccountFilter, SearchField
//! └── response/
//!     └── account_response.rs - AccountResponse, LoginResponse, AccountListResponse
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

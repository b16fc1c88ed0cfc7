//! 계정 응답 DTO
//!
//! ```json
//! {
//!   "success": true,
//!   "data": {
//!     "items": [ { "id": "…", "name": "Ann", "email": "ann@example.com", "role": "user" } ],
//!     "total": 25,
//!     "page": 1,
//!     "per_page": 10,
//!     "total_pages": 3
//!   },
//!   "message": null
//! }
//! ```

pub mod account_response;

pub use account_response::{AccountDataResponse, AccountListResponse, AccountResponse, LoginResponse};

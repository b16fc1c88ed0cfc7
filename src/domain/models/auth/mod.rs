//! 인증 컨텍스트 모델

pub mod authenticated_user;
pub mod required_role;

pub use authenticated_user::AuthenticatedUser;
pub use required_role::RequiredRole;

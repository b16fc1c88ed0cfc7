//! 로그아웃된 액세스 토큰 폐기 목록
//!
//! Redis 에 `session_repository:{jti}` 키로 저장하며, TTL 은 토큰의 남은 유효기간입니다.
//! 토큰이 자연 만료되면 폐기 기록도 함께 사라집니다.
//!
//! ```rust,ignore
//! use crate::repositories::sessions::SessionRepository;
//!
//! let sessions = SessionRepository::instance();
//! sessions.revoke(&user.token_id, user.user_id, 1800).await?;
//! assert!(sessions.is_revoked(&user.token_id).await?);
//! ```

pub mod session_repo;

pub use session_repo::*;

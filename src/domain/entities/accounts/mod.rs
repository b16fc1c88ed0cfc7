//! 계정 엔티티 모듈

pub mod account;

pub use account::{normalize_email, photo_or_default, Account, AccountState, NewAccount, Role};

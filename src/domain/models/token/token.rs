//! JWT 액세스 토큰 클레임과 발급 결과
//!
//! RFC 7519 표준 클레임과 역할 클레임만 담습니다.
use serde::{Deserialize, Serialize};
use crate::domain::entities::Role;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (계정 ID, UUID 문자열)
/// - `role`: 계정 역할
/// - `jti`: 토큰 고유 ID (로그아웃 시 폐기 목록의 키)
/// - `iat` / `nbf` / `exp`: 발급, 유효 시작, 만료 시각 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub role: Role,
    pub jti: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

/// 발급된 액세스 토큰
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// 서명된 JWT 문자열
    pub token: String,
    /// `jti` 클레임 값
    pub token_id: String,
    /// 만료까지 남은 시간 (초)
    pub expires_in: i64,
}

//! # Data Transfer Objects (DTOs)
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 요청/응답 구조체를 정의합니다.
//! Spring Boot의 `@RequestBody` / `@ResponseBody` DTO와 같은 역할입니다.
//!
//! ## 변환 규칙
//!
//! - **Request → 서비스 입력**: 필드 단위의 명시적 생성 (`into_*` 메서드)
//! - **Entity → Response**: `impl From<Account> for AccountResponse`
//! - 비밀번호 해시는 어떤 응답 DTO에도 포함되지 않습니다.
//!
//! ## 응답 봉투
//!
//! 모든 JSON 응답은 [`ApiResponse`] 형태를 따릅니다.
//!
//! ```json
//! { "success": true, "data": { "user": { ... } }, "message": null }
//! { "success": false, "data": null, "message": "Not found: user" }
//! ```

use serde::Serialize;

pub mod accounts;

pub use accounts::*;

/// 공통 응답 봉투
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 데이터만 담은 성공 응답
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// 데이터와 안내 메시지를 함께 담은 성공 응답
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    /// 데이터 없이 메시지만 담은 성공 응답
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_only_response_serializes_null_data() {
        let value = serde_json::to_value(ApiResponse::message("삭제되었습니다")).unwrap();

        assert_eq!(value["success"], true);
        assert!(value["data"].is_null());
        assert_eq!(value["message"], "삭제되었습니다");
    }
}

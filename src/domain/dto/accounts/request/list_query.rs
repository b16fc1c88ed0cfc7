//! 계정 목록 조회 쿼리와 필터
//!
//! 쿼리스트링은 모두 문자열로 받아 관대하게 해석합니다.
//! 숫자/불리언으로 해석할 수 없는 값, 허용 목록에 없는 검색 필드,
//! 알 수 없는 role/provider 값은 에러 없이 무시됩니다.

use serde::Deserialize;
use crate::config::{AccountConfig, AuthProvider};
use crate::domain::entities::Role;

/// 검색 가능한 필드의 허용 목록
///
/// 저장소 질의에 들어가는 필드 이름은 항상 [`SearchField::as_str`] 에서 나오며,
/// 사용자 입력 문자열이 그대로 전달되는 일은 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Email,
}

impl SearchField {
    /// 허용 목록에 없는 이름은 None
    pub fn parse(field: &str) -> Option<Self> {
        match field.trim().to_lowercase().as_str() {
            "name" => Some(SearchField::Name),
            "email" => Some(SearchField::Email),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Email => "email",
        }
    }
}

/// `GET /users` 쿼리스트링
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAccountsQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub search: Option<String>,
    pub search_by: Option<String>,
    pub role: Option<String>,
    pub provider: Option<String>,
    pub verified: Option<String>,
    pub show_deleted: Option<String>,
}

/// 목록 조회 필터
///
/// 페이지 값의 보정(page < 1 → 1, per_page 범위 밖 → 기본값)은
/// 서비스 계층에서 수행합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountFilter {
    pub page: i64,
    pub per_page: i64,
    pub search: Option<String>,
    pub search_by: Option<SearchField>,
    pub role: Option<Role>,
    pub provider: Option<AuthProvider>,
    pub verified: Option<bool>,
    pub include_deleted: bool,
}

impl Default for AccountFilter {
    fn default() -> Self {
        Self {
            page: AccountConfig::DEFAULT_PAGE,
            per_page: AccountConfig::DEFAULT_PER_PAGE,
            search: None,
            search_by: None,
            role: None,
            provider: None,
            verified: None,
            include_deleted: false,
        }
    }
}

impl AccountFilter {
    /// 검색어와 검색 필드가 모두 유효할 때만 (필드, 검색어)를 반환합니다.
    pub fn search_term(&self) -> Option<(SearchField, &str)> {
        let field = self.search_by?;
        let term = self.search.as_deref().map(str::trim)?;

        if term.is_empty() {
            None
        } else {
            Some((field, term))
        }
    }
}

/// `GET /users/{id}` 쿼리스트링
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetAccountQuery {
    pub show_deleted: Option<String>,
}

impl GetAccountQuery {
    pub fn include_deleted(&self) -> bool {
        self.show_deleted
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or(false)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "t" => Some(true),
        "false" | "0" | "f" => Some(false),
        _ => None,
    }
}

impl From<ListAccountsQuery> for AccountFilter {
    fn from(query: ListAccountsQuery) -> Self {
        let defaults = AccountFilter::default();

        Self {
            page: non_empty(query.page)
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.page),
            per_page: non_empty(query.per_page)
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.per_page),
            search: non_empty(query.search),
            search_by: non_empty(query.search_by).and_then(|f| SearchField::parse(&f)),
            role: non_empty(query.role).and_then(|r| Role::from_str(&r).ok()),
            provider: non_empty(query.provider).and_then(|p| AuthProvider::from_str(&p).ok()),
            verified: non_empty(query.verified).and_then(|v| parse_bool(&v)),
            include_deleted: non_empty(query.show_deleted)
                .and_then(|v| parse_bool(&v))
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_query_show_deleted() {
        let query = |v: &str| GetAccountQuery { show_deleted: Some(v.to_string()) };

        assert!(query("true").include_deleted());
        assert!(query(" 1 ").include_deleted());
        assert!(!query("nope").include_deleted());
        assert!(!GetAccountQuery::default().include_deleted());
    }

    #[test]
    fn test_unknown_search_field_is_dropped() {
        let filter = AccountFilter::from(ListAccountsQuery {
            search: Some("admin".to_string()),
            search_by: Some("role".to_string()),
            ..Default::default()
        });

        assert_eq!(filter.search_by, None);
        assert_eq!(filter.search_term(), None);
    }

    #[test]
    fn test_query_is_parsed_leniently() {
        let filter = AccountFilter::from(ListAccountsQuery {
            page: Some("abc".to_string()),
            per_page: Some("25".to_string()),
            search: Some("  ann ".to_string()),
            search_by: Some("Email".to_string()),
            role: Some("admin".to_string()),
            provider: Some("twitter".to_string()),
            verified: Some("maybe".to_string()),
            show_deleted: Some("true".to_string()),
        });

        assert_eq!(filter.page, 1);
        assert_eq!(filter.per_page, 25);
        assert_eq!(filter.search_term(), Some((SearchField::Email, "ann")));
        assert_eq!(filter.role, Some(Role::Admin));
        assert_eq!(filter.provider, None);
        assert_eq!(filter.verified, None);
        assert!(filter.include_deleted);
    }

    #[test]
    fn test_empty_query_uses_defaults() {
        assert_eq!(AccountFilter::from(ListAccountsQuery::default()), AccountFilter::default());
    }
}

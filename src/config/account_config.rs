//! 계정 도메인 기본값

/// 계정 관리 규칙에 쓰이는 상수 모음
pub struct AccountConfig;

impl AccountConfig {
    /// 프로필 이미지가 비어 있을 때 사용하는 기본값
    pub const DEFAULT_PHOTO: &'static str = "default.png";

    /// 비밀번호 최소 길이 (문자 수)
    pub const MIN_PASSWORD_LENGTH: usize = 8;

    /// 목록 조회 기본 페이지
    pub const DEFAULT_PAGE: i64 = 1;

    /// 목록 조회 기본 페이지 크기
    pub const DEFAULT_PER_PAGE: i64 = 10;

    /// 허용되는 최대 페이지 크기. 초과하면 기본값으로 되돌립니다.
    pub const MAX_PER_PAGE: i64 = 100;
}

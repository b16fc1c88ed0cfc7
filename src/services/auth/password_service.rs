//! 비밀번호 해시 서비스
//!
//! bcrypt 로 비밀번호를 해시하고 검증합니다. 평문 비밀번호는 이 모듈 밖으로
//! 저장되거나 로그에 남지 않습니다.

use bcrypt::{hash, verify, DEFAULT_COST};
use once_cell::sync::OnceCell;
use crate::core::errors::{AppResult, ErrorContext};

const DUMMY_PASSWORD: &str = "account-service-timing-placeholder";

/// bcrypt 해시/검증기
///
/// 비용(cost)은 생성 시점에 고정됩니다. 운영 환경은 `BCRYPT_COST`
/// (기본값 [`DEFAULT_COST`]) 를 사용하고, 테스트는 낮은 비용으로 만듭니다.
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
    dummy_digest: OnceCell<String>,
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost, dummy_digest: OnceCell::new() }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 평문 비밀번호를 해시합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - bcrypt 실패 (잘못된 cost 등)
    pub fn hash(&self, password: &str) -> AppResult<String> {
        hash(password, self.cost).context("비밀번호 해시 실패")
    }

    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    ///
    /// 해시 형식이 잘못된 경우는 불일치가 아니라 `InternalError` 입니다.
    pub fn verify(&self, password: &str, password_hash: &str) -> AppResult<bool> {
        verify(password, password_hash).context("비밀번호 검증 실패")
    }

    /// 비교할 해시가 없는 로그인 시도에도 같은 비용의 bcrypt 검증을 수행합니다.
    ///
    /// 결과는 항상 불일치이며, 응답 시간으로 이메일 존재 여부가 드러나지 않게 합니다.
    pub fn verify_absent(&self, password: &str) {
        match self.dummy_digest() {
            Ok(digest) => {
                let _ = verify(password, digest);
            }
            Err(e) => log::error!("더미 해시 생성 실패: {}", e),
        }
    }

    #[cfg(test)]
    pub(crate) fn dummy_digest_ready(&self) -> bool {
        self.dummy_digest.get().is_some()
    }

    fn dummy_digest(&self) -> AppResult<&str> {
        self.dummy_digest
            .get_or_try_init(|| self.hash(DUMMY_PASSWORD))
            .map(String::as_str)
    }
}

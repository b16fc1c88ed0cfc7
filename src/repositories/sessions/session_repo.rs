use std::sync::Arc;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use singleton_macro::repository;
use uuid::Uuid;
use crate::caching::redis::RedisClient;
use crate::core::errors::AppResult;
use crate::core::registry::Repository;

/// 폐기된 토큰 기록
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevokedToken {
    pub account_id: Uuid,
    /// 폐기 시각 (Unix timestamp)
    pub revoked_at: i64,
}

/// 토큰 폐기 목록 리포지토리
#[repository(name = "session", collection = "sessions")]
pub struct SessionRepository {
    redis: Arc<RedisClient>,
}

impl SessionRepository {
    /// 토큰 ID를 `ttl_seconds` 동안 폐기 목록에 올립니다.
    ///
    /// 이미 만료된 토큰(`ttl_seconds == 0`)은 기록하지 않습니다.
    pub async fn revoke(&self, token_id: &str, account_id: Uuid, ttl_seconds: u64) -> AppResult<()> {
        if ttl_seconds == 0 {
            return Ok(());
        }

        let record = RevokedToken {
            account_id,
            revoked_at: Utc::now().timestamp(),
        };
        self.redis
            .set_with_expiry(&self.cache_key(token_id), &record, ttl_seconds)
            .await?;

        log::info!("🚪 토큰 폐기: jti={} account={} ttl={}s", token_id, account_id, ttl_seconds);
        Ok(())
    }

    pub async fn is_revoked(&self, token_id: &str) -> AppResult<bool> {
        Ok(self.redis.exists(&self.cache_key(token_id)).await?)
    }
}

/// 만료 시각까지 남은 초 (이미 지났으면 0)
pub fn remaining_ttl(expires_at: i64) -> u64 {
    (expires_at - Utc::now().timestamp()).max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_ttl() {
        let now = Utc::now().timestamp();

        assert_eq!(remaining_ttl(now - 10), 0);
        let ttl = remaining_ttl(now + 600);
        assert!((599..=600).contains(&ttl));
    }

    #[test]
    fn test_revoked_token_record_serializes() {
        let record = RevokedToken {
            account_id: Uuid::nil(),
            revoked_at: 1_700_000_000,
        };

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["account_id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["revoked_at"], 1_700_000_000);
    }
}

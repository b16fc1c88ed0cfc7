//! 실행 환경과 서버 구동 설정
//!
//! 환경 변수에서 값을 읽고, 값이 없거나 해석할 수 없으면 기본값으로 대체합니다.
//! 대체가 일어난 경우에는 경고 로그를 남깁니다.

use std::env;
use std::str::FromStr;
use log::warn;

/// 애플리케이션 실행 환경 (`ENVIRONMENT`)
///
/// 알 수 없는 값은 가장 보수적인 `Production` 으로 해석합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::parse(&env::var("ENVIRONMENT").unwrap_or_default())
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 인증 쿠키에 `Secure` 속성을 붙일지 결정합니다.
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }

    /// 환경별 bcrypt cost 기본값
    fn default_bcrypt_cost(self) -> u32 {
        match self {
            Environment::Development | Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 환경 변수를 읽어 `T` 로 해석합니다. 값이 없으면 조용히, 해석에 실패하면
/// 경고를 남기고 `default` 를 돌려줍니다.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("⚠️ {} 값 '{}' 을(를) 해석할 수 없어 기본값 {} 사용", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

/// 비밀번호 해시 비용 설정
pub struct PasswordConfig;

impl PasswordConfig {
    const COST_RANGE: std::ops::RangeInclusive<u32> = 4..=15;

    /// `BCRYPT_COST` (4-15) 가 있으면 그 값을, 없으면 실행 환경의 기본값을 씁니다.
    pub fn bcrypt_cost() -> u32 {
        let fallback = Environment::current().default_bcrypt_cost();
        let cost = env_or("BCRYPT_COST", fallback);

        if Self::COST_RANGE.contains(&cost) {
            cost
        } else {
            warn!("⚠️ BCRYPT_COST {} 는 허용 범위 밖입니다. {} 사용", cost, fallback);
            fallback
        }
    }

    pub fn bcrypt_cost_for_env(env: Environment) -> u32 {
        env.default_bcrypt_cost()
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// `PORT`, 기본값 8080
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    /// `HOST`, 기본값 127.0.0.1
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분), 기본값은 로컬 프런트엔드 주소들
    pub fn allowed_origins() -> Vec<String> {
        let raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| {
            "http://localhost:3000,http://127.0.0.1:3000,http://localhost:8080,http://127.0.0.1:8080"
                .to_string()
        });

        split_origins(&raw)
    }

    /// `WORKERS`, 기본값 4
    pub fn workers() -> usize {
        env_or("WORKERS", 4)
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// 요청 속도 제한 설정
///
/// ```bash
/// RATE_LIMIT_PER_SECOND=20
/// RATE_LIMIT_BURST_SIZE=40
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse(" DEV "), Environment::Development);
        assert_eq!(Environment::parse("testing"), Environment::Test);
        assert_eq!(Environment::parse("stage"), Environment::Staging);
        assert_eq!(Environment::parse(""), Environment::Production);
        assert_eq!(Environment::parse("unknown"), Environment::Production);
    }

    #[test]
    fn test_only_production_is_secure() {
        assert!(Environment::parse("prod").is_production());
        assert!(!Environment::Staging.is_production());
        assert!(!Environment::Development.is_production());
    }

    #[test]
    fn test_bcrypt_cost_defaults() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Production), 12);
    }

    #[test]
    fn test_env_or_falls_back_when_missing() {
        let port: u16 = env_or("ACCOUNT_SERVICE_TEST_UNSET_PORT", 9090);

        assert_eq!(port, 9090);
    }

    #[test]
    fn test_split_origins_skips_blanks() {
        assert_eq!(
            split_origins(" http://a.test , ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn test_server_defaults() {
        if env::var("HOST").is_err() && env::var("PORT").is_err() {
            assert_eq!(ServerConfig::bind_address(), "127.0.0.1:8080");
        }
    }
}

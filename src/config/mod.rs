//! # Configuration Module
//!
//! 계정 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, bcrypt cost, 서버 바인딩/CORS/워커 수, Rate Limiting
//! - [`auth_config`] - JWT 설정과 계정 출처(AuthProvider)
//! - [`account_config`] - 페이지네이션, 기본 프로필 이미지 등 계정 규칙 상수
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://localhost:8080"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="account_service_dev"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_MINUTES="60"
//! export JWT_MAXAGE="60"
//!
//! # 보안 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Configuration` | `ServerConfig`, `JwtConfig` 등 단위 구조체 |
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env` 파일 |

pub mod data_config;
pub mod auth_config;
pub mod account_config;

pub use data_config::*;
pub use auth_config::*;
pub use account_config::*;

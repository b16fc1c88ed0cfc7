//! 캐싱 계층 모듈
//!
//! Redis 기반 키-값 저장소를 제공합니다. 현재는 로그아웃된 액세스 토큰의
//! 폐기 목록(TTL = 토큰 잔여 수명)을 보관하는 데 사용됩니다.
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;

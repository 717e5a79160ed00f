//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 분산 캐시 지원과 JSON 기반 객체 직렬화를 제공합니다.
//!
//! # 주요 기능
//!
//! - Redis 통합 및 연결 풀링
//! - JSON 기반 자동 직렬화/역직렬화
//! - TTL 지원 (세션 미러, 토큰 블랙리스트)
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("user_session:123", &entry, 1_209_600).await?;
//!
//! let cached: Option<SessionCacheEntry> = cache.get("user_session:123").await?;
//! let revoked = cache.exists("blacklist_token:abc").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;

//! # 토큰 블랙리스트 리포지토리 구현
//!
//! 로그아웃으로 회수된 액세스 토큰을 Redis에 기록합니다.
//! 항목의 TTL은 토큰의 잔여 수명과 같으므로, 토큰이 자연 만료되는 시점에
//! 블랙리스트 항목도 함께 사라집니다.

use std::sync::Arc;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use singleton_macro::repository;
use crate::caching::redis::RedisClient;
use crate::core::registry::Repository;
use crate::errors::errors::AppError;

/// 블랙리스트 항목 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlacklistEntry {
    /// 블랙리스트 추가 시간 (Unix timestamp)
    pub revoked_at: i64,
}

/// 액세스 토큰 블랙리스트 리포지토리
///
/// Redis를 사용하여 회수된 토큰을 관리합니다.
///
/// - **키 패턴**: `blacklist_token:{sha256(access_token)}`
/// - **원자적 기록**: 값 저장과 TTL 설정이 SETEX 단일 명령으로 처리되어
///   TTL 없이 영구히 남는 항목이 생길 수 없습니다
/// - **자동 만료**: Redis TTL이 만료된 항목을 자동으로 제거합니다
#[repository(name = "blacklist", collection = "blacklist")]
pub struct BlacklistRepository {
    redis: Arc<RedisClient>,
}

impl BlacklistRepository {
    /// 토큰을 SHA-256 해시로 변환
    ///
    /// 긴 JWT 전문 대신 고정 길이 해시를 Redis 키로 사용합니다.
    fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// 액세스 토큰을 블랙리스트에 추가합니다.
    ///
    /// # Arguments
    /// * `access_token` - 회수할 액세스 토큰
    /// * `ttl_seconds` - 항목 수명. 토큰의 잔여 수명과 같게 설정합니다
    pub async fn add(&self, access_token: &str, ttl_seconds: u64) -> Result<(), AppError> {
        // 이미 만료된 토큰은 기록할 필요가 없음
        if ttl_seconds == 0 {
            return Ok(());
        }

        let key = format!("blacklist_token:{}", Self::hash_token(access_token));
        let entry = BlacklistEntry {
            revoked_at: Utc::now().timestamp(),
        };

        self.redis
            .set_with_expiry(&key, &entry, ttl_seconds as usize)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        log::info!("토큰이 블랙리스트에 추가됨 - 토큰 해시: {}, TTL: {}초", &key[16..32], ttl_seconds);
        Ok(())
    }

    /// 토큰이 블랙리스트에 있는지 확인합니다.
    ///
    /// # Returns
    /// * `true` - 회수된 토큰 (사용 불가)
    /// * `false` - 블랙리스트에 없음
    pub async fn is_blacklisted(&self, access_token: &str) -> Result<bool, AppError> {
        let key = format!("blacklist_token:{}", Self::hash_token(access_token));
        self.redis
            .exists(&key)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.payload.sig";
        assert_eq!(
            BlacklistRepository::hash_token(token),
            BlacklistRepository::hash_token(token)
        );
    }

    #[test]
    fn test_hash_is_hex_sha256() {
        let hash = BlacklistRepository::hash_token("token");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_different_tokens_different_hashes() {
        assert_ne!(
            BlacklistRepository::hash_token("token-a"),
            BlacklistRepository::hash_token("token-b")
        );
    }
}

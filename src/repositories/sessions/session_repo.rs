//! # 리프레시 세션 리포지토리 구현
//!
//! 사용자당 하나의 리프레시 세션을 MongoDB `sessions` 컬렉션에 유지합니다.
//! 인증 판단의 진실의 원천은 항상 MongoDB 문서이며,
//! Redis에는 운영 관측용 미러만 남깁니다.

use std::sync::Arc;
use chrono::Utc;
use mongodb::{bson::doc, options::IndexOptions, IndexModel};
use serde::{Deserialize, Serialize};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::sessions::session::SessionRecord,
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// Redis에 미러링되는 세션 요약
///
/// 운영자가 활성 세션을 들여다보기 위한 사본입니다.
/// 인증 경로에서는 절대 이 값을 신뢰하지 않습니다.
/// 미러 쓰기/삭제가 실패해도 요청은 계속 진행됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCacheEntry {
    /// 세션 소유 사용자 ID
    pub user_id: String,
    /// 현재 유효한 리프레시 토큰
    pub refresh_token: String,
    /// 로그인 시각 (Unix timestamp)
    pub login_time: i64,
    /// 클라이언트 IP
    pub ip: String,
    /// 클라이언트 User-Agent
    pub user_agent: String,
    /// 마지막 활동 시각 (Unix timestamp)
    pub last_activity_time: i64,
}

/// 리프레시 세션 데이터 액세스 리포지토리
///
/// ## 원자적 upsert
///
/// 로그인과 토큰 회전은 모두 `upsert_session` 하나로 처리됩니다.
/// 집계 파이프라인 업데이트로 문서 생성과 `refresh_count` 증가가
/// 단일 연산 안에서 이루어지므로, 동시 요청이 겹쳐도
/// 카운터가 건너뛰거나 중복되지 않습니다.
///
/// - 문서가 없으면: 새로 생성되고 `refresh_count = 0`
/// - 문서가 있으면: 덮어써지고 `refresh_count`가 정확히 1 증가
#[repository(name = "session", collection = "sessions")]
pub struct SessionRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (미러 전용)
    redis: Arc<RedisClient>,
}

impl SessionRepository {
    /// 세션을 원자적으로 upsert하고 갱신된 레코드를 반환합니다.
    ///
    /// `$ifNull` 기본값 -1에 1을 더하는 방식으로, 삽입 시 0,
    /// 갱신 시 기존 값 +1이 단일 파이프라인 안에서 계산됩니다.
    pub async fn upsert_session(
        &self,
        user_id: &str,
        refresh_token: &str,
        ip: &str,
        user_agent: &str,
    ) -> Result<SessionRecord, AppError> {
        let update = Self::upsert_pipeline(user_id, refresh_token, ip, user_agent);

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<SessionRecord>()
            .find_one_and_update(doc! { "user_id": user_id }, update)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError("세션 upsert 결과가 비어 있습니다".to_string()))
    }

    /// 리프레시 토큰으로 세션 조회
    ///
    /// 토큰 재발급 경로에서 사용됩니다. 제시된 리프레시 토큰이
    /// 현재 세션의 토큰과 정확히 일치하는 문서만 반환됩니다.
    pub async fn find_by_refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<Option<SessionRecord>, AppError> {
        self.collection::<SessionRecord>()
            .find_one(Self::refresh_lookup_filter(refresh_token))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// upsert에 사용되는 집계 파이프라인을 구성합니다.
    ///
    /// `$ifNull` 기본값 -1에 1을 더하므로 삽입 시 `refresh_count = 0`,
    /// 갱신 시 기존 값 +1이 됩니다.
    fn upsert_pipeline(
        user_id: &str,
        refresh_token: &str,
        ip: &str,
        user_agent: &str,
    ) -> Vec<mongodb::bson::Document> {
        vec![doc! {
            "$set": {
                "user_id": user_id,
                "refresh_token": refresh_token,
                "ip": ip,
                "user_agent": user_agent,
                "valid": true,
                "updated_at": "$$NOW",
                "refresh_count": {
                    "$add": [ { "$ifNull": ["$refresh_count", -1] }, 1 ]
                },
            }
        }]
    }

    /// 리프레시 토큰 조회 필터. 유효한 세션만 대상입니다.
    fn refresh_lookup_filter(refresh_token: &str) -> mongodb::bson::Document {
        doc! { "refresh_token": refresh_token, "valid": true }
    }

    /// 세션 미러를 Redis에 기록합니다. 실패해도 에러를 전파하지 않습니다.
    ///
    /// 키: `user_session:{user_id}`, TTL: 리프레시 토큰 수명
    pub async fn mirror(&self, record: &SessionRecord, ttl_seconds: i64) {
        let now = Utc::now().timestamp();
        let entry = SessionCacheEntry {
            user_id: record.user_id.clone(),
            refresh_token: record.refresh_token.clone(),
            login_time: now,
            ip: record.ip.clone(),
            user_agent: record.user_agent.clone(),
            last_activity_time: now,
        };

        let key = format!("user_session:{}", record.user_id);
        if let Err(e) = self.redis.set_with_expiry(&key, &entry, ttl_seconds.max(1) as usize).await {
            log::warn!("세션 미러 기록 실패 - user_id: {}, 에러: {}", record.user_id, e);
        }
    }

    /// 세션 미러를 제거합니다. 실패해도 에러를 전파하지 않습니다.
    pub async fn drop_mirror(&self, user_id: &str) {
        let key = format!("user_session:{}", user_id);
        if let Err(e) = self.redis.del(&key).await {
            log::warn!("세션 미러 제거 실패 - user_id: {}, 에러: {}", user_id, e);
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. **user_id 유니크 인덱스** - 사용자당 하나의 세션 보장
    /// 2. **refresh_token 인덱스** - 재발급 경로의 토큰 조회 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<SessionRecord>();

        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_id_unique".to_string())
                .build())
            .build();

        let refresh_token_index = IndexModel::builder()
            .keys(doc! { "refresh_token": 1 })
            .options(IndexOptions::builder()
                .name("refresh_token_lookup".to_string())
                .build())
            .build();

        collection
            .create_indexes([user_id_index, refresh_token_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_counter_starts_at_zero_on_insert() {
        let pipeline = SessionRepository::upsert_pipeline("u1", "rt", "1.2.3.4", "ua");
        assert_eq!(pipeline.len(), 1);

        let set = pipeline[0].get_document("$set").unwrap();
        let add = set
            .get_document("refresh_count")
            .unwrap()
            .get_array("$add")
            .unwrap();

        // 문서가 없으면 $refresh_count가 null이므로 -1 + 1 = 0으로 시작
        let if_null = add[0].as_document().unwrap().get_array("$ifNull").unwrap();
        assert_eq!(if_null[1].as_i32(), Some(-1));
        // 문서가 있으면 기존 값 + 1, 정확히 1씩만 증가
        assert_eq!(add[1].as_i32(), Some(1));
    }

    #[test]
    fn test_upsert_overwrites_token_and_metadata() {
        let pipeline = SessionRepository::upsert_pipeline("u1", "rt-new", "1.2.3.4", "ua");
        let set = pipeline[0].get_document("$set").unwrap();

        // 이전 리프레시 토큰은 같은 문서가 덮어써지며 즉시 무효화됨
        assert_eq!(set.get_str("user_id"), Ok("u1"));
        assert_eq!(set.get_str("refresh_token"), Ok("rt-new"));
        assert_eq!(set.get_str("ip"), Ok("1.2.3.4"));
        assert_eq!(set.get_str("user_agent"), Ok("ua"));
        assert_eq!(set.get_bool("valid"), Ok(true));
        assert_eq!(set.get_str("updated_at"), Ok("$$NOW"));
    }

    #[test]
    fn test_lookup_requires_valid_session() {
        let filter = SessionRepository::refresh_lookup_filter("rt");
        assert_eq!(filter.get_str("refresh_token"), Ok("rt"));
        assert_eq!(filter.get_bool("valid"), Ok(true));
    }
}

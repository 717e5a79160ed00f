//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **잠금 카운터 관리**: 로그인 실패 횟수의 원자적 증가/초기화
//! - **데이터 무결성**: 유니크 제약 조건 및 인덱스 관리

use std::sync::Arc;
use mongodb::{bson::{doc, oid::ObjectId, DateTime}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::users::user::{InvalidStatus, InvalidStatusRecord, User},
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// 사용자 데이터 액세스 리포지토리
///
/// 사용자 엔티티의 조회와 잠금 상태 갱신을 담당하며,
/// MongoDB 컬렉션과 Redis 캐시를 통합합니다.
///
/// ## 캐싱 전략
///
/// ### L1 Cache (Redis)
/// - **TTL**: 10분 (600초)
/// - **키 패턴**: 개별 사용자 `user:{user_id}`
///
/// 이메일 조회는 의도적으로 캐싱하지 않습니다. 로그인 경로는 매 시도마다
/// 최신 `incorrect_pw_count`를 읽어야 하므로 항상 DB를 직접 조회합니다.
///
/// ### L2 Storage (MongoDB)
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique), created_at(desc)
///
/// ## 에러 처리
///
/// 모든 메서드는 `Result<T, AppError>` 타입을 반환합니다.
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ValidationError**: 잘못된 ObjectId 형식 등 입력값 검증 오류
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    ///
    /// 자동 주입되는 데이터베이스 컴포넌트입니다.
    /// `users` 컬렉션에 대한 모든 MongoDB 연산을 담당합니다.
    db: Arc<Database>,

    /// Redis 캐시 클라이언트
    ///
    /// 자동 주입되는 Redis 클라이언트입니다.
    /// 조회 성능 향상을 위한 캐싱 레이어를 제공합니다.
    redis: Arc<RedisClient>,
}

impl UserRepository {
    /// 이메일 주소로 사용자 조회
    ///
    /// 로그인 경로 전용 조회입니다. 잠금 카운터가 항상 최신이어야 하므로
    /// 캐시를 거치지 않고 DB를 직접 조회합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    /// * `Err(AppError)` - 데이터베이스 오류
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    ///
    /// 가장 빈번한 조회 패턴이므로 적극적인 캐싱을 적용합니다.
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `user:{id}` (리포지토리 매크로의 `cache_key()` 사용)
    /// - **TTL**: 600초 (10분)
    /// - **캐시 미스**: MongoDB에서 조회 후 캐시에 저장
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let user = self.collection::<User>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장
        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, 600)
                .await;
        }

        Ok(user)
    }

    /// 로그인 실패 횟수를 원자적으로 1 증가시키고 증가된 값을 반환합니다.
    ///
    /// `$inc` 연산자와 `ReturnDocument::After`를 사용하여
    /// 조회-증가-저장 경쟁 없이 단일 연산으로 처리합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(i32)` - 증가된 실패 횟수
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없는 경우
    pub async fn increment_failed_logins(&self, id: &str) -> Result<i32, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<User>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! {
                    "$inc": { "incorrect_pw_count": 1 },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 무효화
        let _ = self.invalidate_cache(id).await;

        updated
            .map(|user| user.incorrect_pw_count)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 로그인 실패 횟수를 0으로 초기화합니다.
    ///
    /// 성공한 로그인 직후에만 호출됩니다. 증가와 초기화는 별도 연산이므로
    /// 한쪽 경로에서 실수로 다른 쪽이 호출될 수 없습니다.
    pub async fn reset_failed_logins(&self, id: &str) -> Result<(), AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection::<User>()
            .update_one(
                doc! { "_id": object_id },
                doc! {
                    "$set": {
                        "incorrect_pw_count": 0,
                        "updated_at": DateTime::now(),
                    },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 무효화
        let _ = self.invalidate_cache(id).await;

        Ok(())
    }

    /// 계정을 제한 상태로 전환합니다.
    ///
    /// `valid`를 false로 내리고 제한 사유를 이력에 추가합니다.
    /// 이후 이 계정의 로그인 시도는 자격 검증 전에 거부됩니다.
    pub async fn mark_invalid(&self, id: &str, status: InvalidStatus) -> Result<(), AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let record = InvalidStatusRecord {
            status: status.as_code(),
            occurred_at: DateTime::now(),
        };
        let record_doc = mongodb::bson::to_document(&record)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        self.collection::<User>()
            .update_one(
                doc! { "_id": object_id },
                doc! {
                    "$set": {
                        "valid": false,
                        "updated_at": DateTime::now(),
                    },
                    "$push": { "invalid_statuses": record_doc },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 무효화
        let _ = self.invalidate_cache(id).await;

        Ok(())
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 사용자 컬렉션에 필요한 모든 인덱스를 생성합니다.
    /// 애플리케이션 초기화 시점에 한 번 실행하여 쿼리 성능을 최적화합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 유니크 인덱스** - 중복 이메일 방지 및 로그인 조회 최적화
    /// 2. **생성일 인덱스** - 최근 사용자 조회 및 정렬 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<User>();

        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

//! Session Entity Implementation
//!
//! 리프레시 세션 레코드입니다. MongoDB `sessions` 컬렉션의 문서와 매핑되며,
//! 사용자당 하나의 문서가 upsert로 유지됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 리프레시 세션 레코드
///
/// 진실의 원천(source of truth)은 이 MongoDB 문서입니다.
/// Redis 미러는 관측용 사본일 뿐 인증 판단에 사용되지 않습니다.
///
/// `refresh_count`는 토큰 회전마다 정확히 1씩 증가합니다.
/// 최초 로그인 시 0으로 시작하며, 값이 건너뛰면 비정상 회전의 신호입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 세션 소유 사용자 ID (unique)
    pub user_id: String,
    /// 현재 유효한 리프레시 토큰
    pub refresh_token: String,
    /// 토큰 회전 횟수. 최초 로그인 시 0
    pub refresh_count: i64,
    /// 마지막 로그인/재발급 시점의 클라이언트 IP
    pub ip: String,
    /// 마지막 로그인/재발급 시점의 User-Agent
    pub user_agent: String,
    /// 세션 유효 여부
    pub valid: bool,
    /// 마지막 갱신 시각
    pub updated_at: DateTime,
}

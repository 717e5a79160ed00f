//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/비밀번호 인증 정보와 로그인 실패 잠금 상태를 함께 관리합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 계정 제한 사유
///
/// `valid`가 false로 전환될 때 함께 기록되는 사유 코드입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidStatus {
    /// 운영자에 의한 비활성화
    Disabled,
    /// 비밀번호 5회 초과 오류로 인한 잠금
    PasswordAttemptsExceeded,
}

impl InvalidStatus {
    /// 영속용 사유 코드
    pub fn as_code(&self) -> i32 {
        match self {
            InvalidStatus::Disabled => 1,
            InvalidStatus::PasswordAttemptsExceeded => 2,
        }
    }
}

/// 계정 제한 이력 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvalidStatusRecord {
    /// 제한 사유 코드 (`InvalidStatus::as_code`)
    pub status: i32,
    /// 제한 발생 시각
    pub occurred_at: DateTime,
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 인증 자격(이메일, bcrypt 해시)과 토큰 클레임에 실리는 속성(gender, grade, role),
/// 그리고 로그인 실패 잠금 상태(incorrect_pw_count, valid)를 담습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 성별
    pub gender: bool,
    /// 학년
    pub grade: i32,
    /// 역할. 0은 일반 사용자이며 토큰에 role 클레임이 실리지 않습니다.
    pub role: i32,
    /// 계정 유효 여부. false이면 로그인이 거부됩니다.
    pub valid: bool,
    /// 계정 제한 이력
    #[serde(default)]
    pub invalid_statuses: Vec<InvalidStatusRecord>,
    /// 연속 로그인 실패 횟수
    #[serde(default)]
    pub incorrect_pw_count: i32,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    pub fn new(email: String, password_hash: String, gender: bool, grade: i32, role: i32) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            password_hash,
            gender,
            grade,
            role,
            valid: true,
            invalid_statuses: Vec::new(),
            incorrect_pw_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 로그인이 제한된 계정인지 확인
    pub fn is_restricted(&self) -> bool {
        !self.valid
    }

    /// 역할 보유 여부. role이 0보다 큰 경우에만 토큰에 role 클레임이 실립니다.
    pub fn has_role(&self) -> bool {
        self.role > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_unrestricted() {
        let user = User::new(
            "user@example.com".to_string(),
            "$2b$12$hash".to_string(),
            true,
            3,
            0,
        );

        assert!(!user.is_restricted());
        assert_eq!(user.incorrect_pw_count, 0);
        assert!(user.invalid_statuses.is_empty());
    }

    #[test]
    fn test_has_role_only_for_positive_role() {
        let mut user = User::new(
            "user@example.com".to_string(),
            "$2b$12$hash".to_string(),
            false,
            1,
            0,
        );
        assert!(!user.has_role());

        user.role = 2;
        assert!(user.has_role());
    }

    #[test]
    fn test_invalid_status_codes() {
        assert_eq!(InvalidStatus::Disabled.as_code(), 1);
        assert_eq!(InvalidStatus::PasswordAttemptsExceeded.as_code(), 2);
    }
}

//! JWT 인증 토큰 구조체 및 페어링 된 세트
//!
//! RFC 7519 JWT 표준 클레임과 2개의 용도별 토큰을 페어링 한 정보를 표시합니다.
use serde::{Deserialize, Serialize};

/// 액세스 토큰의 클레임(Payload) 구조체
///
/// RFC 7519 JWT 표준의 클레임과 애플리케이션 특화 클레임을 포함합니다.
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
///
/// ## 클레임 구성
///
/// - `user_id`: 사용자 고유 ID
/// - `gender`: 성별
/// - `grade`: 학년 (문자열로 직렬화)
/// - `role`: 역할. 역할 보유자(role > 0)에만 존재하며, 일반 사용자 토큰에는
///   필드 자체가 실리지 않습니다
/// - `aud` / `iss`: 발급 대상과 발급자
/// - `iat` / `exp`: 발급 시간과 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// 사용자 고유 ID
    #[serde(rename = "userId")]
    pub user_id: String,
    /// 성별
    pub gender: bool,
    /// 학년 (숫자를 문자열로 변환하여 저장)
    pub grade: String,
    /// 역할. role이 0보다 큰 사용자에게만 존재
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// 토큰 발급 대상
    pub aud: String,
    /// 토큰 발급자
    pub iss: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// 리프레시 토큰의 클레임 구조체
///
/// 리프레시 토큰은 사용자 정보를 일절 담지 않는 불투명 토큰입니다.
/// 매 발급마다 새로 생성되는 UUID만 담으며, 사용자와의 연결은
/// 세션 레코드 조회를 통해서만 이루어집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    /// 발급마다 새로 생성되는 난수 식별자
    pub uuid: String,
    /// 토큰 발급 대상
    pub aud: String,
    /// 토큰 발급자
    pub iss: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 쌍 구조체
///
/// 클라이언트에게 전달되는 토큰 집합을 나타냅니다.
/// OAuth 2.0 표준의 토큰 응답 형식을 따릅니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}

/// 토큰 검증 결과
///
/// 검증 실패를 "만료"와 "그 외 모든 실패"로 구분하는 3상 결과입니다.
/// 만료는 리프레시 토큰을 통한 복구 대상이고,
/// 위조/형식 오류/서명 불일치는 복구 없이 즉시 거부됩니다.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenVerification<T> {
    /// 서명과 수명이 모두 유효함
    Valid(T),
    /// 서명은 유효하나 수명이 지남
    Expired,
    /// 위조, 형식 오류, 서명 불일치 등 그 외 모든 실패
    Invalid,
}

impl<T> TokenVerification<T> {
    /// 유효한 클레임이면 꺼내고, 아니면 None
    pub fn into_valid(self) -> Option<T> {
        match self {
            TokenVerification::Valid(claims) => Some(claims),
            _ => None,
        }
    }
}

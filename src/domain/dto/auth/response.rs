//! 인증 응답관련 DTO

use serde::{Deserialize, Serialize};
use crate::domain::models::token::TokenPair;

/// 로그인 응답 DTO (JWT 토큰 포함)
///
/// OAuth 2.0 표준의 토큰 응답 형식을 따릅니다.
/// 웹 클라이언트의 리프레시 토큰은 본문이 아닌 HttpOnly 쿠키로도 전달됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<TokenPair> for LoginResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: pair.expires_in,
        }
    }
}

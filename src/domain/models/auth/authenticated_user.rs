use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::models::token::AccessTokenClaims;

/// 검증된 액세스 토큰에서 추출된 인증 주체
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 역할. 역할 보유자에게만 존재
    pub role: Option<i32>,
}

impl AuthenticatedUser {
    /// 역할 보유 여부 확인
    pub fn has_role(&self) -> bool {
        self.role.is_some()
    }
}

impl From<&AccessTokenClaims> for AuthenticatedUser {
    fn from(claims: &AccessTokenClaims) -> Self {
        Self {
            user_id: claims.user_id.clone(),
            role: claims.role.as_deref().and_then(|r| r.parse().ok()),
        }
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 인증 미들웨어가 request extensions에 심어 둔 주체를 꺼냅니다.
/// 미들웨어를 거치지 않은 경로에서 사용하면 401이 반환됩니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "로그인이 필요합니다."
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(role: Option<&str>) -> AccessTokenClaims {
        AccessTokenClaims {
            user_id: "507f1f77bcf86cd799439011".to_string(),
            gender: true,
            grade: "3".to_string(),
            role: role.map(|r| r.to_string()),
            aud: "neurocircuit".to_string(),
            iss: "neurocircuit-auth".to_string(),
            iat: 1_700_000_000,
            exp: 1_700_003_600,
        }
    }

    #[test]
    fn test_principal_without_role() {
        let user = AuthenticatedUser::from(&claims(None));
        assert_eq!(user.user_id, "507f1f77bcf86cd799439011");
        assert!(!user.has_role());
    }

    #[test]
    fn test_principal_with_role() {
        let user = AuthenticatedUser::from(&claims(Some("2")));
        assert_eq!(user.role, Some(2));
        assert!(user.has_role());
    }
}

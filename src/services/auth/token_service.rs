//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰과 리프레시 토큰의 생성과 3상 검증을 담당합니다.

use std::sync::Arc;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use singleton_macro::service;
use uuid::Uuid;
use crate::{
    config::AuthConfig,
    domain::entities::users::user::User,
};
use crate::domain::models::token::{AccessTokenClaims, RefreshTokenClaims, TokenPair, TokenVerification};
use crate::errors::errors::AppError;

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 안전한 JWT 토큰을 생성하고 검증합니다.
/// 액세스 토큰과 리프레시 토큰은 서로 다른 비밀키로 서명되므로
/// 한쪽 토큰을 다른 쪽 용도로 제시할 수 없습니다.
///
/// 검증은 에러가 아닌 [`TokenVerification`] 3상 결과를 반환합니다.
/// 만료만 복구 대상으로 구분되고, 나머지 모든 실패는 Invalid로 합쳐집니다.
#[service(name = "token")]
pub struct TokenService {
    /// 부팅 시 고정된 인증 설정
    config: Arc<AuthConfig>,
}

impl TokenService {
    /// 사용자를 위한 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// 액세스 토큰에는 사용자 속성(gender, grade)이 실리며,
    /// role 클레임은 역할 보유자(role > 0)에게만 포함됩니다.
    /// 리프레시 토큰은 매 발급마다 새로 생성되는 UUID만 담습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 사용자 ID 없음
    pub fn issue_token_pair(&self, user: &User) -> Result<TokenPair, AppError> {
        Self::issue_pair(&self.config, user)
    }

    /// 액세스 토큰 검증
    ///
    /// 서명, audience, issuer, 만료를 모두 확인합니다.
    pub fn verify_access(&self, token: &str) -> TokenVerification<AccessTokenClaims> {
        Self::verify(&self.config.access_secret, &self.config, token)
    }

    /// 리프레시 토큰 검증
    pub fn verify_refresh(&self, token: &str) -> TokenVerification<RefreshTokenClaims> {
        Self::verify(&self.config.refresh_secret, &self.config, token)
    }

    /// 액세스 토큰의 잔여 수명(초)을 계산합니다.
    ///
    /// 이미 만료된 토큰은 0을 반환합니다.
    /// 로그아웃 시 블랙리스트 항목의 TTL로 사용됩니다.
    pub fn remaining_lifetime(&self, exp: i64) -> u64 {
        (exp - Utc::now().timestamp()).max(0) as u64
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError("유효하지 않은 토큰입니다.".to_string()))
        }
    }

    fn issue_pair(config: &AuthConfig, user: &User) -> Result<TokenPair, AppError> {
        let user_id = user.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;

        let now = Utc::now();
        let access_exp = now + Duration::seconds(config.access_ttl_secs);
        let refresh_exp = now + Duration::seconds(config.refresh_ttl_secs);

        let access_claims = AccessTokenClaims {
            user_id,
            gender: user.gender,
            grade: user.grade.to_string(),
            // role 클레임은 역할 보유자에게만 존재. 일반 사용자 토큰에는
            // 필드 자체가 실리지 않음
            role: user.has_role().then(|| user.role.to_string()),
            aud: config.audience.clone(),
            iss: config.issuer.clone(),
            iat: now.timestamp(),
            exp: access_exp.timestamp(),
        };

        let refresh_claims = RefreshTokenClaims {
            uuid: Uuid::new_v4().to_string(),
            aud: config.audience.clone(),
            iss: config.issuer.clone(),
            iat: now.timestamp(),
            exp: refresh_exp.timestamp(),
        };

        let access_token = Self::sign(&config.access_secret, &access_claims)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))?;
        let refresh_token = Self::sign(&config.refresh_secret, &refresh_claims)
            .map_err(|e| AppError::InternalError(format!("리프레시 토큰 생성 실패: {}", e)))?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: config.access_ttl_secs,
        })
    }

    fn sign<T: Serialize>(secret: &str, claims: &T) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_ref()))
    }

    /// 3상 검증. 만료만 Expired로 구분하고 나머지 실패는 모두 Invalid
    fn verify<T: DeserializeOwned>(
        secret: &str,
        config: &AuthConfig,
        token: &str,
    ) -> TokenVerification<T> {
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let mut validation = Validation::default();
        validation.set_audience(&[&config.audience]);
        validation.set_issuer(&[&config.issuer]);

        match decode::<T>(token, &decoding_key, &validation) {
            Ok(data) => TokenVerification::Valid(data.claims),
            Err(e) => match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenVerification::Expired,
                _ => TokenVerification::Invalid,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig::new(
            "access-secret-test".to_string(),
            "refresh-secret-test".to_string(),
            3600,
            1_209_600,
            "neurocircuit".to_string(),
            "neurocircuit-auth".to_string(),
            "refresh_token".to_string(),
            false,
        )
    }

    fn test_user(role: i32) -> User {
        let mut user = User::new(
            "user@example.com".to_string(),
            "$2b$12$hash".to_string(),
            true,
            3,
            role,
        );
        user.id = Some(mongodb::bson::oid::ObjectId::new());
        user
    }

    #[test]
    fn test_role_claim_absent_for_ordinary_user() {
        let config = test_config();
        let pair = TokenService::issue_pair(&config, &test_user(0)).unwrap();

        match TokenService::verify::<AccessTokenClaims>(&config.access_secret, &config, &pair.access_token) {
            TokenVerification::Valid(claims) => {
                assert!(claims.role.is_none());
                assert_eq!(claims.grade, "3");
            }
            other => panic!("expected Valid, got {:?}", other),
        }
    }

    #[test]
    fn test_role_claim_present_for_role_holder() {
        let config = test_config();
        let pair = TokenService::issue_pair(&config, &test_user(2)).unwrap();

        let claims = TokenService::verify::<AccessTokenClaims>(&config.access_secret, &config, &pair.access_token)
            .into_valid()
            .unwrap();
        assert_eq!(claims.role.as_deref(), Some("2"));
    }

    #[test]
    fn test_refresh_uuid_differs_per_issue() {
        let config = test_config();
        let user = test_user(0);
        let first = TokenService::issue_pair(&config, &user).unwrap();
        let second = TokenService::issue_pair(&config, &user).unwrap();

        let a = TokenService::verify::<RefreshTokenClaims>(&config.refresh_secret, &config, &first.refresh_token)
            .into_valid()
            .unwrap();
        let b = TokenService::verify::<RefreshTokenClaims>(&config.refresh_secret, &config, &second.refresh_token)
            .into_valid()
            .unwrap();
        assert_ne!(a.uuid, b.uuid);
    }

    #[test]
    fn test_wrong_secret_is_invalid_not_expired() {
        let config = test_config();
        let pair = TokenService::issue_pair(&config, &test_user(0)).unwrap();

        // 리프레시 비밀키로 액세스 토큰을 검증하면 서명 불일치
        let result = TokenService::verify::<AccessTokenClaims>(&config.refresh_secret, &config, &pair.access_token);
        assert_eq!(result, TokenVerification::Invalid);
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let config = test_config();
        let result = TokenService::verify::<AccessTokenClaims>(&config.access_secret, &config, "not.a.jwt");
        assert_eq!(result, TokenVerification::Invalid);
    }

    #[test]
    fn test_expired_token_is_expired() {
        let config = test_config();
        let now = Utc::now();
        let claims = AccessTokenClaims {
            user_id: "507f1f77bcf86cd799439011".to_string(),
            gender: false,
            grade: "1".to_string(),
            role: None,
            aud: config.audience.clone(),
            iss: config.issuer.clone(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = TokenService::sign(&config.access_secret, &claims).unwrap();

        let result = TokenService::verify::<AccessTokenClaims>(&config.access_secret, &config, &token);
        assert_eq!(result, TokenVerification::Expired);
    }

    #[test]
    fn test_wrong_audience_is_invalid() {
        let config = test_config();
        let pair = TokenService::issue_pair(&config, &test_user(0)).unwrap();

        let mut other = test_config();
        other.audience = "some-other-service".to_string();
        let result = TokenService::verify::<AccessTokenClaims>(&other.access_secret, &other, &pair.access_token);
        assert_eq!(result, TokenVerification::Invalid);
    }
}

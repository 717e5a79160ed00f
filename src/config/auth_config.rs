//! # Authentication Configuration Module
//!
//! JWT 서명 비밀키, 토큰 수명, 리프레시 토큰 전달 방식 등
//! 인증 관련 설정을 관리하는 모듈입니다.
//!
//! 설정은 부팅 시점에 한 번 읽혀 불변 값 `AuthConfig`로 고정되고,
//! `ServiceLocator`에 등록되어 `Arc<AuthConfig>` 필드로 주입됩니다.
//! 기동 이후 환경 변수를 다시 읽지 않으므로 요청 처리 중에
//! 설정이 바뀌는 일이 없습니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export ACCESS_JWT_SECRET="your-access-token-secret"
//! export REFRESH_JWT_SECRET="your-refresh-token-secret"
//! export ACCESS_JWT_EXPIRATION="3600"       # 초 단위
//! export REFRESH_JWT_EXPIRATION="1209600"   # 초 단위 (14일)
//! export JWT_AUDIENCE="neurocircuit"
//! export JWT_ISSUER="neurocircuit-auth"
//! export REFRESH_TOKEN_NAME="refresh_token"
//! ```

use std::env;
use crate::config::data_config::Environment;

/// 액세스 토큰 기본 수명 (1시간)
const DEFAULT_ACCESS_TTL_SECS: i64 = 3600;
/// 리프레시 토큰 기본 수명 (14일)
const DEFAULT_REFRESH_TTL_SECS: i64 = 1_209_600;

/// 인증 설정 값 객체
///
/// JWT 발급/검증과 리프레시 토큰 전달에 필요한 모든 설정을 담는
/// 불변 구조체입니다. `from_env()`로 부팅 시 한 번 생성됩니다.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// 액세스 토큰 서명 비밀키
    pub access_secret: String,
    /// 리프레시 토큰 서명 비밀키
    pub refresh_secret: String,
    /// 액세스 토큰 수명 (초)
    pub access_ttl_secs: i64,
    /// 리프레시 토큰 수명 (초). 항상 액세스 토큰 수명보다 큽니다.
    pub refresh_ttl_secs: i64,
    /// JWT audience 클레임
    pub audience: String,
    /// JWT issuer 클레임
    pub issuer: String,
    /// 리프레시 토큰 쿠키/헤더 이름
    pub refresh_token_name: String,
    /// 쿠키 Secure 속성 사용 여부 (프로덕션에서 true)
    pub secure_cookies: bool,
}

impl AuthConfig {
    /// 환경 변수에서 인증 설정을 읽어 생성합니다.
    ///
    /// 비밀키가 설정되지 않은 경우 개발용 기본값을 사용하며 경고를 남깁니다.
    /// 리프레시 토큰 수명이 액세스 토큰 수명 이하로 설정된 경우
    /// 기본 수명으로 보정합니다.
    pub fn from_env() -> Self {
        let access_secret = env::var("ACCESS_JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("ACCESS_JWT_SECRET not set, using default (not secure for production!)");
            "access-secret-dev".to_string()
        });

        let refresh_secret = env::var("REFRESH_JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("REFRESH_JWT_SECRET not set, using default (not secure for production!)");
            "refresh-secret-dev".to_string()
        });

        let access_ttl_secs = env::var("ACCESS_JWT_EXPIRATION")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ACCESS_TTL_SECS);

        let refresh_ttl_secs = env::var("REFRESH_JWT_EXPIRATION")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REFRESH_TTL_SECS);

        let audience = env::var("JWT_AUDIENCE")
            .unwrap_or_else(|_| "neurocircuit".to_string());

        let issuer = env::var("JWT_ISSUER")
            .unwrap_or_else(|_| "neurocircuit-auth".to_string());

        let refresh_token_name = env::var("REFRESH_TOKEN_NAME")
            .unwrap_or_else(|_| "refresh_token".to_string());

        let secure_cookies = Environment::current().is_production();

        Self::new(
            access_secret,
            refresh_secret,
            access_ttl_secs,
            refresh_ttl_secs,
            audience,
            issuer,
            refresh_token_name,
            secure_cookies,
        )
    }

    /// 설정 값으로 직접 생성합니다.
    ///
    /// 리프레시 토큰 수명 > 액세스 토큰 수명 불변식을 보장합니다.
    /// 잘못된 값이 들어오면 패닉 대신 기본 수명으로 보정하고 경고를 남깁니다.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        access_secret: String,
        refresh_secret: String,
        access_ttl_secs: i64,
        refresh_ttl_secs: i64,
        audience: String,
        issuer: String,
        refresh_token_name: String,
        secure_cookies: bool,
    ) -> Self {
        let access_ttl_secs = if access_ttl_secs <= 0 {
            log::warn!("액세스 토큰 수명이 잘못 설정됨 ({}초). 기본값 {}초 사용", access_ttl_secs, DEFAULT_ACCESS_TTL_SECS);
            DEFAULT_ACCESS_TTL_SECS
        } else {
            access_ttl_secs
        };

        let refresh_ttl_secs = if refresh_ttl_secs <= access_ttl_secs {
            log::warn!(
                "리프레시 토큰 수명({}초)이 액세스 토큰 수명({}초) 이하로 설정됨. 기본값 {}초 사용",
                refresh_ttl_secs, access_ttl_secs, DEFAULT_REFRESH_TTL_SECS
            );
            DEFAULT_REFRESH_TTL_SECS.max(access_ttl_secs + 1)
        } else {
            refresh_ttl_secs
        };

        Self {
            access_secret,
            refresh_secret,
            access_ttl_secs,
            refresh_ttl_secs,
            audience,
            issuer,
            refresh_token_name,
            secure_cookies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_ttls(access: i64, refresh: i64) -> AuthConfig {
        AuthConfig::new(
            "access-secret".to_string(),
            "refresh-secret".to_string(),
            access,
            refresh,
            "neurocircuit".to_string(),
            "neurocircuit-auth".to_string(),
            "refresh_token".to_string(),
            false,
        )
    }

    #[test]
    fn test_valid_ttls_kept() {
        let config = config_with_ttls(3600, 1_209_600);
        assert_eq!(config.access_ttl_secs, 3600);
        assert_eq!(config.refresh_ttl_secs, 1_209_600);
    }

    #[test]
    fn test_refresh_ttl_clamped_above_access_ttl() {
        let config = config_with_ttls(3600, 3600);
        assert!(config.refresh_ttl_secs > config.access_ttl_secs);

        let config = config_with_ttls(3600, 60);
        assert!(config.refresh_ttl_secs > config.access_ttl_secs);
    }

    #[test]
    fn test_invalid_access_ttl_uses_default() {
        let config = config_with_ttls(0, 1_209_600);
        assert_eq!(config.access_ttl_secs, 3600);

        let config = config_with_ttls(-10, 1_209_600);
        assert_eq!(config.access_ttl_secs, 3600);
    }
}

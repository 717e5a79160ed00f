//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 실행 환경 관련 설정
//! - [`auth_config`] - JWT, 리프레시 토큰 관련 인증 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//!
//! ### 3. 부팅 시점 고정 (Boot-time Freeze)
//!
//! 인증 설정은 `AuthConfig::from_env()`로 부팅 시 한 번 읽혀
//! 불변 값으로 고정됩니다. 요청 처리 중 환경 변수를 다시 읽지 않습니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//!
//! # JWT 설정
//! export ACCESS_JWT_SECRET="your-access-secret"
//! export REFRESH_JWT_SECRET="your-refresh-secret"
//! export ACCESS_JWT_EXPIRATION="3600"
//! export REFRESH_JWT_EXPIRATION="1209600"
//! export JWT_ISSUER="neurocircuit-auth"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 인증과 세션 수명주기를 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - JWT 액세스/리프레시 토큰 생성과 3상 검증
//! - 로그인 실패 잠금 (5회 경고, 6회째 계정 제한)
//! - 세션 회전 및 리프레시 복구
//! - 로그아웃 토큰 회수 (블랙리스트)
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명 (액세스/리프레시 별도 비밀키)
//! - bcrypt 비밀번호 검증
//! - 토큰 만료 시간 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, TokenService};
//!
//! let auth_service = AuthService::instance();
//! let pair = auth_service.login(&request, ip, user_agent).await?;
//!
//! let token_service = TokenService::instance();
//! let result = token_service.verify_access(&pair.access_token);
//! ```

pub mod token_service;
pub mod lockout_service;
pub mod auth_service;

pub use token_service::*;
pub use lockout_service::*;
pub use auth_service::*;

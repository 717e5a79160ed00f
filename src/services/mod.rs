//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 인증/세션 흐름의 전 과정을 담당합니다.
//!
//! # Features
//!
//! - JWT 토큰 기반 인증 시스템
//! - 로그인 실패 잠금 및 계정 제한
//! - 세션 회전과 리프레시 복구
//! - 자동 의존성 주입 및 싱글톤 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, TokenService};
//!
//! let auth_service = AuthService::instance();
//! let token_service = TokenService::instance();
//! ```

pub mod auth;

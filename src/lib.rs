//! 뉴로서킷 인증/세션 서비스 백엔드
//!
//! Rust 기반의 JWT 인증 및 로그인 세션 관리 서비스입니다.
//! 액세스/리프레시 토큰 쌍, 로그인 실패 잠금, 토큰 블랙리스트,
//! 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **자격 증명 검증**: bcrypt 기반 이메일/패스워드 로그인
//! - **로그인 잠금**: 비밀번호 5회 오류시 계정 제한
//! - **JWT 인증**: 액세스/리프레시 토큰 기반 상태 없는 인증
//! - **투명한 토큰 갱신**: 만료된 액세스 토큰을 요청 처리 중에 자동 재발급
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 사용자/세션 데이터 영구 저장
//! - **Redis**: 세션 미러링 및 토큰 블랙리스트
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  AuthMiddleware │ ← 요청별 인증 상태 기계
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 인증/토큰/잠금 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use auth_session_backend::services::auth::{AuthService, TokenService};
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let auth_service = AuthService::instance();
//! let token_service = TokenService::instance();
//!
//! // 로그인 및 토큰 발급
//! let tokens = auth_service.login(&request, ip, user_agent).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

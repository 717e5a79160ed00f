//! 토큰 블랙리스트 리포지토리 모듈
//!
//! 로그아웃으로 회수된 액세스 토큰의 무효화를 담당합니다.
//! Redis TTL을 통해 만료된 항목이 자동으로 정리됩니다.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::repositories::tokens::blacklist_repo::BlacklistRepository;
//!
//! let blacklist = BlacklistRepository::instance();
//!
//! // 로그아웃: 잔여 수명만큼 블랙리스트에 추가
//! blacklist.add(access_token, 1800).await?;
//!
//! // 매 인증 요청마다 확인
//! if blacklist.is_blacklisted(access_token).await? {
//!     return Err(AppError::AuthorizationError("비정상적인 접근입니다.".to_string()));
//! }
//! ```

pub mod blacklist_repo;

pub use blacklist_repo::*;

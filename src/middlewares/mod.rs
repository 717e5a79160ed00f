//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! 횡단 관심사(Cross-cutting concerns)를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - 액세스 토큰 검증 및 블랙리스트 확인
//! - 만료된 토큰의 투명한 리프레시 복구
//! - 인증 주체를 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/me")
//!             .wrap(AuthMiddleware::new())
//!             .route("", web::get().to(me))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
pub(crate) use auth_inner::{cleared_refresh_cookie, refresh_cookie};

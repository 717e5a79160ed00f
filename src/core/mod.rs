//! # Core Framework Module
//!
//! 백엔드 서비스를 위한 핵심 프레임워크 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 전역 싱글톤 컨테이너
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스 등록
//! - **싱글톤 관리**: Thread-safe한 인스턴스 생명주기 관리
//! - **의존성 해결**: Arc<T> 타입 기반 자동 의존성 주입
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//!
//! #[repository(name = "session", collection = "sessions")]
//! struct SessionRepository {
//!     db: Arc<Database>,
//!     redis: Arc<RedisClient>,
//! }
//!
//! #[service(name = "auth")]
//! struct AuthService {
//!     session_repo: Arc<SessionRepository>,  // 자동 주입
//! }
//!
//! // 사용
//! let auth_service = AuthService::instance();
//! ```

pub mod registry;

pub use registry::*;

//! 리프레시 세션 리포지토리 모듈
//!
//! [`SessionRepository`](session_repo::SessionRepository)를 통해 사용자당 하나의
//! 리프레시 세션을 MongoDB에 유지하고, Redis에 관측용 미러를 남깁니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::sessions::session_repo::SessionRepository;
//!
//! let session_repo = SessionRepository::instance();
//! let record = session_repo.upsert_session(&user_id, &refresh_token, ip, ua).await?;
//! assert_eq!(record.refresh_count, 0); // 최초 로그인
//! ```

pub mod session_repo;

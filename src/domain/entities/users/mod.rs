//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//! 이메일/비밀번호 인증과 로그인 실패 잠금 상태를 담는 User 엔티티를 포함합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = user_repo.find_by_email("user@example.com").await?;
//! if let Some(user) = user {
//!     if user.is_restricted() {
//!         return Err(AppError::RestrictedAccount(
//!             "제한된 계정입니다. 고객센터로 문의해 주세요.".to_string()));
//!     }
//! }
//! ```

pub mod user;

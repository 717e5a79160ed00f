//! # Domain Entities Module
//!
//! 이 모듈은 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되는 데이터 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 비즈니스 도메인의 핵심 개념들을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: MongoDB 컬렉션과 1:1 대응되는 문서 구조 정의
//! - **타입 안전성**: 컴파일 타임에 데이터 일관성 보장
//! - **직렬화/역직렬화**: BSON ↔ Rust 구조체 변환 지원
//!
//! ## 싱글톤 매크로 연동
//!
//! 이 엔티티들은 프로젝트의 `#[repository]` 매크로와 함께 사용됩니다:
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! #[repository(name = "user", collection = "users")]
//! struct UserRepository {
//!     db: Arc<Database>,
//!     redis: Arc<RedisClient>,
//! }
//!
//! impl UserRepository {
//!     async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
//!         self.collection::<User>()
//!             .find_one(doc! { "email": email })
//!             .await
//!             .map_err(|e| AppError::DatabaseError(e.to_string()))
//!     }
//! }
//! ```
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── users/          ← 사용자 계정 엔티티 (잠금 카운터 포함)
//! └── sessions/       ← 리프레시 세션 엔티티 (사용자당 1개)
//! ```
//!
//! ## 주의사항
//!
//! - **순환 참조 금지**: 엔티티 간 직접 참조보다는 ID 참조 사용
//! - **인덱스 설계**: 쿼리 패턴에 맞는 인덱스는 리포지토리의 `create_indexes()`에서 생성

pub mod users;
pub mod sessions;

//! # Domain Models Module
//!
//! 도메인의 비즈니스 모델과 값 객체(Value Objects)를 정의하는 모듈입니다.
//! entities와는 구별되는 역할을 담당합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 데이터베이스에 직접 저장되는 객체
//! - **정체성**: 고유한 식별자(ID)를 가짐
//! - **예시**: `User`, `SessionRecord`
//!
//! ### Models (`./`)
//! - **요청 수명**: 단일 요청 처리 동안만 존재하는 객체
//! - **값 객체**: 식별자보다는 값 자체가 중요
//! - **불변성**: 일반적으로 불변 객체로 설계
//! - **예시**: `AccessTokenClaims`, `TokenVerification`, `AuthDecision`
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── token/    ← JWT 클레임, 토큰 쌍, 검증 결과
//! └── auth/     ← 인증 주체, 인증 판정, 클라이언트 종류
//! ```

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;

//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 로직과 도메인 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (User, SessionRecord)
//! ├── DTOs         - 데이터 전송 객체 (Request/Response)
//! └── Models       - 요청 처리 모델 (토큰 클레임, 인증 주체)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! MongoDB 컬렉션과 1:1 대응되는 영속 객체들입니다.
//! `User`(계정/잠금 상태)와 `SessionRecord`(리프레시 세션)가 여기에 속합니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 데이터를 전송하기 위한 객체들입니다.
//! `validator` 크레이트로 입력 형식과 제약 조건을 검증합니다.
//!
//! ### [`models`] - 요청 처리 모델
//!
//! 영속되지 않는 요청 수명 내 모델들입니다.
//! JWT 클레임, 검증 결과, 인증된 주체, 클라이언트 종류 등이 여기에 속합니다.
//!
//! ## 설계 원칙
//!
//! - **타입 안전성**: 컴파일 타임 검증, `Option<T>`를 통한 null 안전성
//! - **명시적 변환**: From/Into trait을 통한 계층 간 타입 변환
//! - **불변성 우선**: 가능한 한 불변 객체로 설계

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;

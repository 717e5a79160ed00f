//! 인증 모델 모듈
//!
//! 미들웨어와 핸들러 사이를 흐르는 인증 관련 요청 수명 모델들입니다.
//!
//! - [`authenticated_user`] - 검증된 토큰에서 추출한 인증 주체
//! - [`auth_decision`] - 요청 인증 판정 (주체 + 회전된 토큰)
//! - [`client_kind`] - 리프레시 토큰 전달 방식을 결정하는 클라이언트 종류

pub mod authenticated_user;
pub mod auth_decision;
pub mod client_kind;

pub use authenticated_user::*;
pub use auth_decision::*;
pub use client_kind::*;

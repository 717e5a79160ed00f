//! 토큰 모델 모듈
//!
//! JWT 클레임 구조체와 토큰 검증 결과 타입을 정의합니다.

pub mod token;

pub use token::*;

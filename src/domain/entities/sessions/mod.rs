//! Sessions Entity Module
//!
//! 리프레시 세션 엔티티를 정의하는 모듈입니다.
//! 사용자당 정확히 하나의 세션 레코드가 존재하며,
//! 로그인과 토큰 재발급마다 같은 레코드가 덮어써집니다.

pub mod session;

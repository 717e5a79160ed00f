//! 요청 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 액세스 토큰을 검증하고 인증 주체를 추출합니다.
//! 만료된 액세스 토큰은 리프레시 토큰으로 요청 중에 투명하게 복구됩니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 요청 인증 미들웨어
///
/// 보호된 스코프에 `.wrap(AuthMiddleware::new())`로 적용합니다.
/// 통과한 요청의 extensions에는 `AuthenticatedUser`가 들어 있습니다.
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new() -> Self {
        Self
    }
}

impl Default for AuthMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

//! AuthMiddleware 인증 상태 기계의 핵심 로직
//!
//! 요청마다 다음 순서로 판정합니다.
//!
//! 1. 토큰이 하나도 없으면 401 (쿠키 변경 없음)
//! 2. 액세스 토큰이 있으면 블랙리스트 확인 (회수된 토큰은 403)
//! 3. 액세스 토큰 검증: 유효하면 통과, 위조면 401,
//!    만료면 리프레시 복구 시도
//! 4. 복구 성공 시 새 토큰 쌍이 응답에 실리고, 실패 시
//!    401과 함께 리프레시 쿠키가 제거됨
use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::cookie::{time::Duration as CookieDuration, Cookie};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::config::AuthConfig;
use crate::errors::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::models::auth::{AuthDecision, AuthenticatedUser, ClientKind};
use crate::domain::models::token::{TokenPair, TokenVerification};
use crate::services::auth::{AuthService, TokenService};

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let token_service = TokenService::instance();
            let auth_service = AuthService::instance();
            let config = ServiceLocator::get::<AuthConfig>();

            let client_kind = ClientKind::from_request(&req);
            let access_token = extract_access_token(&req);
            let refresh_token = extract_refresh_token(&req, client_kind, &config.refresh_token_name);

            // 토큰이 하나도 없는 요청. 복구를 시도한 것이 아니므로
            // 클라이언트의 쿠키는 건드리지 않음
            if access_token.is_none() && refresh_token.is_none() {
                let response = HttpResponse::Unauthorized().json(serde_json::json!({
                    "error": "authentication_required",
                    "message": "로그인이 필요합니다."
                }));
                return Ok(short_circuit(req, response));
            }

            let ip = req
                .connection_info()
                .realip_remote_addr()
                .unwrap_or("unknown")
                .to_string();
            let user_agent = req
                .headers()
                .get(header::USER_AGENT)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown")
                .to_string();

            // 액세스 토큰이 있으면 먼저 판정
            if let Some(ref token) = access_token {
                // 회수된 토큰은 서명이 유효해도 사용할 수 없음.
                // 저장소 장애는 회수 판정과 구분하여 500 계열로 전파
                match auth_service.ensure_not_blacklisted(token).await {
                    Ok(()) => {}
                    Err(e) if is_revocation(&e) => {
                        log::warn!("회수된 토큰으로 접근 시도");
                        let response = HttpResponse::Forbidden().json(serde_json::json!({
                            "error": "revoked_token",
                            "message": "비정상적인 접근입니다."
                        }));
                        return Ok(short_circuit(req, response));
                    }
                    Err(e) => return Err(e.into()),
                }

                match token_service.verify_access(token) {
                    TokenVerification::Valid(claims) => {
                        let principal = AuthenticatedUser::from(&claims);
                        log::debug!("인증 성공: 사용자 ID {}", principal.user_id);
                        req.extensions_mut().insert(principal.clone());
                        req.extensions_mut().insert(AuthDecision::passed(principal));

                        let res = service.call(req).await?;
                        return Ok(res.map_into_left_body());
                    }
                    TokenVerification::Invalid => {
                        log::warn!("위조되었거나 손상된 액세스 토큰");
                        let response = HttpResponse::Unauthorized().json(serde_json::json!({
                            "error": "invalid_token",
                            "message": "유효하지 않은 토큰입니다."
                        }));
                        return Ok(short_circuit(req, response));
                    }
                    TokenVerification::Expired => {
                        // 만료는 유일한 복구 대상. 아래의 리프레시 경로로 진행
                    }
                }
            }

            // 만료된 액세스 토큰 또는 액세스 토큰 없이 리프레시만 제시된 경우
            let Some(refresh) = refresh_token else {
                let response = HttpResponse::Unauthorized().json(serde_json::json!({
                    "error": "authentication_required",
                    "message": "로그인이 필요합니다."
                }));
                return Ok(short_circuit(req, response));
            };

            match auth_service.recover(&refresh, &ip, &user_agent).await {
                Ok((principal, pair)) => {
                    req.extensions_mut().insert(principal.clone());
                    req.extensions_mut().insert(AuthDecision::recovered(principal, pair));

                    let res = service.call(req).await?;

                    // 회전된 토큰 쌍은 extensions에 실린 판정에서 꺼내 응답에 싣는다
                    let rotated = res
                        .request()
                        .extensions()
                        .get::<AuthDecision>()
                        .and_then(|decision| decision.rotated.clone());

                    let mut res = res.map_into_left_body();
                    if let Some(pair) = rotated {
                        attach_rotated_tokens(&mut res, &pair, &config);
                    }
                    Ok(res)
                }
                Err(_) => {
                    // 복구 실패. 쓸모없는 리프레시 쿠키를 클라이언트에서 제거
                    let response = HttpResponse::Unauthorized()
                        .cookie(cleared_refresh_cookie(&config.refresh_token_name))
                        .json(serde_json::json!({
                            "error": "invalid_token",
                            "message": "유효하지 않은 토큰입니다."
                        }));
                    Ok(short_circuit(req, response))
                }
            }
        })
    }
}

/// 블랙리스트 확인 실패가 회수 판정인지 구분합니다.
///
/// 회수된 토큰만 403으로 거부됩니다. Redis 장애 같은 저장소 에러는
/// 회수로 취급하지 않고 그대로 전파됩니다.
fn is_revocation(err: &AppError) -> bool {
    matches!(err, AppError::AuthorizationError(_))
}

/// 에러 응답으로 요청을 중단합니다.
fn short_circuit<B>(
    req: ServiceRequest,
    response: HttpResponse,
) -> ServiceResponse<EitherBody<B>> {
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

/// Authorization 헤더에서 Bearer 토큰을 추출합니다.
fn extract_access_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.to_string())
}

/// 클라이언트 종류에 따라 리프레시 토큰을 추출합니다.
///
/// 네이티브 앱은 설정된 이름의 전용 헤더로, 웹은 같은 이름의 쿠키로 보냅니다.
fn extract_refresh_token(
    req: &ServiceRequest,
    client_kind: ClientKind,
    token_name: &str,
) -> Option<String> {
    match client_kind {
        ClientKind::Native => req
            .headers()
            .get(token_name)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string()),
        ClientKind::Web => req
            .headers()
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|cookies| parse_cookie_value(cookies, token_name)),
    }
}

/// Cookie 헤더 문자열에서 특정 쿠키 값을 찾습니다.
fn parse_cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .filter_map(|pair| {
            let mut parts = pair.trim().splitn(2, '=');
            let key = parts.next()?.trim();
            let value = parts.next()?.trim();
            (key == name && !value.is_empty()).then(|| value.to_string())
        })
        .next()
}

/// 회전된 토큰 쌍을 응답에 싣습니다.
///
/// 새 액세스 토큰은 Authorization 헤더로, 새 리프레시 토큰은
/// HttpOnly 쿠키로 나갑니다.
fn attach_rotated_tokens<B>(
    res: &mut ServiceResponse<B>,
    pair: &TokenPair,
    config: &Arc<AuthConfig>,
) {
    if let Ok(value) = header::HeaderValue::from_str(&format!("Bearer {}", pair.access_token)) {
        res.headers_mut().insert(header::AUTHORIZATION, value);
    }

    let cookie = refresh_cookie(
        &config.refresh_token_name,
        &pair.refresh_token,
        config.secure_cookies,
        config.refresh_ttl_secs,
    );
    if let Err(e) = res.response_mut().add_cookie(&cookie) {
        log::warn!("리프레시 쿠키 설정 실패: {}", e);
    }
}

/// 리프레시 토큰 쿠키 생성
pub(crate) fn refresh_cookie(
    name: &str,
    value: &str,
    secure: bool,
    max_age_secs: i64,
) -> Cookie<'static> {
    Cookie::build(name.to_string(), value.to_string())
        .path("/")
        .http_only(true)
        .secure(secure)
        .max_age(CookieDuration::seconds(max_age_secs))
        .finish()
}

/// 즉시 만료되는 빈 리프레시 쿠키 생성 (클라이언트 측 제거용)
pub(crate) fn cleared_refresh_cookie(name: &str) -> Cookie<'static> {
    Cookie::build(name.to_string(), String::new())
        .path("/")
        .http_only(true)
        .max_age(CookieDuration::ZERO)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_failure_not_treated_as_revocation() {
        // Redis 장애로 블랙리스트 확인이 실패해도 403이 되어서는 안 됨
        assert!(is_revocation(&AppError::AuthorizationError(
            "비정상적인 접근입니다.".to_string()
        )));
        assert!(!is_revocation(&AppError::RedisError(
            "connection refused".to_string()
        )));
        assert!(!is_revocation(&AppError::InternalError(
            "unexpected".to_string()
        )));
    }

    #[test]
    fn test_parse_cookie_value() {
        let header = "theme=dark; refresh_token=abc.def.ghi; lang=ko";
        assert_eq!(
            parse_cookie_value(header, "refresh_token"),
            Some("abc.def.ghi".to_string())
        );
        assert_eq!(parse_cookie_value(header, "theme"), Some("dark".to_string()));
        assert_eq!(parse_cookie_value(header, "missing"), None);
    }

    #[test]
    fn test_parse_cookie_ignores_empty_value() {
        assert_eq!(parse_cookie_value("refresh_token=", "refresh_token"), None);
    }

    #[test]
    fn test_refresh_cookie_attributes() {
        let cookie = refresh_cookie("refresh_token", "value", true, 1_209_600);
        assert_eq!(cookie.name(), "refresh_token");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.max_age(), Some(CookieDuration::seconds(1_209_600)));
    }

    #[test]
    fn test_cleared_cookie_expires_immediately() {
        let cookie = cleared_refresh_cookie("refresh_token");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(CookieDuration::ZERO));
    }
}

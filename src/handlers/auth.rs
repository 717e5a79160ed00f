//! Authentication HTTP Handlers
//!
//! 인증 및 세션 수명주기와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 이메일/비밀번호 로그인과 토큰 회수(로그아웃), 현재 사용자 조회를 제공합니다.
//!
//! # Endpoints
//!
//! - **로그인**: 이메일/패스워드 방식 (`POST /auth/login`)
//! - **로그아웃**: 액세스 토큰 회수 (`POST /auth/logout`)
//! - **현재 사용자**: 인증 주체 조회 (`GET /me`)
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::config::AuthConfig;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::auth::{LoginRequest, LoginResponse};
use crate::domain::models::auth::{AuthenticatedUser, ClientKind};
use crate::errors::errors::AppError;
use crate::middlewares::{cleared_refresh_cookie, refresh_cookie};
use crate::repositories::users::user_repo::UserRepository;
use crate::services::auth::{AuthService, TokenService};

/// 로그인 핸들러
///
/// 이메일과 비밀번호를 검증하고 토큰 쌍을 발급합니다.
/// 웹 클라이언트는 리프레시 토큰을 HttpOnly 쿠키로 받고,
/// 네이티브 클라이언트는 응답 본문에서 직접 읽습니다.
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(
    req: HttpRequest,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let auth_service = AuthService::instance();
    let config = ServiceLocator::get::<AuthConfig>();

    let ip = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();
    let user_agent = req
        .headers()
        .get("User-Agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    log::info!("로그인 시도 - 이메일: {}", payload.email);

    let pair = auth_service.login(&payload, &ip, &user_agent).await?;

    let client_kind = ClientKind::from_header(
        req.headers()
            .get("X-Client-Kind")
            .and_then(|v| v.to_str().ok()),
    );

    let response = LoginResponse::from(pair.clone());
    let authorization = ("Authorization", format!("Bearer {}", pair.access_token));

    match client_kind {
        // 웹은 리프레시 토큰을 쿠키로만 전달
        ClientKind::Web => Ok(HttpResponse::Ok()
            .insert_header(authorization)
            .cookie(refresh_cookie(
                &config.refresh_token_name,
                &pair.refresh_token,
                config.secure_cookies,
                config.refresh_ttl_secs,
            ))
            .json(response)),
        ClientKind::Native => Ok(HttpResponse::Ok()
            .insert_header(authorization)
            .json(response)),
    }
}

/// 로그아웃 핸들러
///
/// 제시된 액세스 토큰을 남은 수명 동안 블랙리스트에 올리고
/// 세션 미러를 제거합니다. 이미 만료된 토큰의 로그아웃은 성공으로 처리됩니다.
///
/// # Endpoint
/// `POST /auth/logout`
#[post("/logout")]
pub async fn logout(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let token_service = TokenService::instance();
    let auth_service = AuthService::instance();
    let config = ServiceLocator::get::<AuthConfig>();

    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("로그인이 필요합니다.".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    auth_service.logout(token).await?;

    Ok(HttpResponse::Ok()
        .cookie(cleared_refresh_cookie(&config.refresh_token_name))
        .json(json!({ "message": "로그아웃 되었습니다." })))
}

/// 현재 인증된 사용자 정보 조회 핸들러
///
/// 미들웨어가 넣어 준 인증 주체를 기반으로 최신 사용자 정보를 반환합니다.
///
/// # Endpoint
/// `GET /me`
#[get("")]
pub async fn get_me(principal: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let user_repo = UserRepository::instance();

    let user = user_repo
        .find_by_id(&principal.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({
        "id": user.id_string().unwrap_or_default(),
        "email": user.email,
        "gender": user.gender,
        "grade": user.grade,
        "role": user.role,
        "valid": user.valid,
        "created_at": user.created_at,
        "updated_at": user.updated_at
    })))
}

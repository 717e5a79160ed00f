//! 인증 오케스트레이션 서비스 구현
//!
//! 로그인, 토큰 회전, 리프레시 복구, 로그아웃의 전체 흐름을 담당합니다.
//! 자격 검증과 잠금 판정은 하위 서비스에 위임하고,
//! 이 서비스는 단계의 순서와 실패 의미 결정만 책임집니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    config::AuthConfig,
    domain::dto::auth::request::LoginRequest,
    domain::entities::users::user::User,
    domain::models::auth::AuthenticatedUser,
    domain::models::token::{TokenPair, TokenVerification},
    repositories::sessions::session_repo::SessionRepository,
    repositories::tokens::blacklist_repo::BlacklistRepository,
    repositories::users::user_repo::UserRepository,
    services::auth::lockout_service::LockoutService,
    services::auth::token_service::TokenService,
};
use crate::errors::errors::AppError;

/// 인증 오케스트레이션 서비스
///
/// ## 로그인 단계 순서
///
/// 1. 계정 조회 (없으면 자격 불일치와 같은 메시지로 거부)
/// 2. 제한 계정 확인 (자격 검증보다 먼저, 올바른 비밀번호로도 통과 불가)
/// 3. bcrypt 자격 검증 (불일치 시 실패 카운터 증가)
/// 4. 실패 카운터 초기화
/// 5. 토큰 발급 + 세션 회전
///
/// ## 리프레시 복구
///
/// 복구 경로의 모든 실패는 구체적 원인과 무관하게 단일한
/// 401 응답으로 합쳐집니다. 어느 단계에서 실패했는지가
/// 공격자에게 관찰되지 않아야 하기 때문입니다.
#[service(name = "auth")]
pub struct AuthService {
    /// 부팅 시 고정된 인증 설정
    config: Arc<AuthConfig>,
    /// 사용자 리포지토리
    user_repo: Arc<UserRepository>,
    /// 리프레시 세션 리포지토리
    session_repo: Arc<SessionRepository>,
    /// 토큰 블랙리스트 리포지토리
    blacklist_repo: Arc<BlacklistRepository>,
    /// JWT 토큰 서비스
    token_service: Arc<TokenService>,
    /// 로그인 실패 잠금 서비스
    lockout_service: Arc<LockoutService>,
}

impl AuthService {
    /// 이메일/비밀번호 로그인
    ///
    /// 계정이 없는 경우와 비밀번호가 틀린 경우 모두 계정 존재 여부를
    /// 드러내지 않는 메시지로 거부됩니다. 단, 실패 카운터는 실제 계정이
    /// 있는 경우에만 증가합니다.
    pub async fn login(
        &self,
        request: &LoginRequest,
        ip: &str,
        user_agent: &str,
    ) -> Result<TokenPair, AppError> {
        let user = self
            .user_repo
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                AppError::ValidationError("없는 계정이거나 비밀번호가 일치하지 않습니다.".to_string())
            })?;

        // 제한 계정은 자격 검증에 들어가기 전에 거부
        self.lockout_service.ensure_not_restricted(&user)?;

        let matches = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !matches {
            return Err(self.lockout_service.record_failure(&user).await);
        }

        self.lockout_service.reset_on_success(&user).await?;

        let pair = self.rotate(&user, ip, user_agent).await?;
        log::info!("로그인 성공 - user_id: {}", user.id_string().unwrap_or_default());
        Ok(pair)
    }

    /// 토큰 발급과 세션 회전
    ///
    /// 새 토큰 쌍을 발급하고 세션 레코드를 원자적으로 upsert한 뒤,
    /// Redis에 관측용 미러를 남깁니다. 미러 실패는 무시됩니다.
    pub async fn rotate(&self, user: &User, ip: &str, user_agent: &str) -> Result<TokenPair, AppError> {
        let user_id = user.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;

        let pair = self.token_service.issue_token_pair(user)?;

        let record = self
            .session_repo
            .upsert_session(&user_id, &pair.refresh_token, ip, user_agent)
            .await?;

        self.session_repo.mirror(&record, self.config.refresh_ttl_secs).await;

        Ok(pair)
    }

    /// 리프레시 토큰을 통한 인증 복구
    ///
    /// 만료된 액세스 토큰 대신 리프레시 토큰으로 주체를 복원하고
    /// 새 토큰 쌍을 발급합니다. 검증 실패, 세션 불일치, 사용자 소실,
    /// 제한 계정 등 모든 실패가 동일한 401로 합쳐집니다.
    pub async fn recover(
        &self,
        refresh_token: &str,
        ip: &str,
        user_agent: &str,
    ) -> Result<(AuthenticatedUser, TokenPair), AppError> {
        let degraded = || AppError::AuthenticationError("유효하지 않은 토큰입니다.".to_string());

        // 서명/수명 검증. 만료도 복구 불가이므로 Valid만 통과
        if !matches!(self.token_service.verify_refresh(refresh_token), TokenVerification::Valid(_)) {
            return Err(degraded());
        }

        // 제시된 토큰이 현재 세션의 토큰과 정확히 일치해야 함
        let session = self
            .session_repo
            .find_by_refresh_token(refresh_token)
            .await
            .map_err(|_| degraded())?
            .ok_or_else(degraded)?;

        let user = self
            .user_repo
            .find_by_id(&session.user_id)
            .await
            .map_err(|_| degraded())?
            .ok_or_else(degraded)?;

        if user.is_restricted() {
            return Err(degraded());
        }

        let pair = self.rotate(&user, ip, user_agent).await.map_err(|_| degraded())?;

        let principal = AuthenticatedUser {
            user_id: session.user_id,
            role: user.has_role().then_some(user.role),
        };

        log::info!("리프레시 복구 성공 - user_id: {}", principal.user_id);
        Ok((principal, pair))
    }

    /// 액세스 토큰이 회수된 토큰인지 확인합니다.
    pub async fn ensure_not_blacklisted(&self, access_token: &str) -> Result<(), AppError> {
        if self.blacklist_repo.is_blacklisted(access_token).await? {
            return Err(AppError::AuthorizationError("비정상적인 접근입니다.".to_string()));
        }
        Ok(())
    }

    /// 로그아웃
    ///
    /// 제시된 액세스 토큰을 잔여 수명만큼 블랙리스트에 추가하고
    /// 세션 미러를 제거합니다. 이미 만료된 토큰은 회수할 것이 없으므로
    /// 그대로 성공 처리됩니다.
    pub async fn logout(&self, access_token: &str) -> Result<(), AppError> {
        match self.token_service.verify_access(access_token) {
            TokenVerification::Valid(claims) => {
                let remaining = self.token_service.remaining_lifetime(claims.exp);
                self.blacklist_repo.add(access_token, remaining).await?;
                self.session_repo.drop_mirror(&claims.user_id).await;
                log::info!("로그아웃 완료 - user_id: {}", claims.user_id);
                Ok(())
            }
            TokenVerification::Expired => Ok(()),
            TokenVerification::Invalid => {
                Err(AppError::AuthenticationError("유효하지 않은 토큰입니다.".to_string()))
            }
        }
    }
}

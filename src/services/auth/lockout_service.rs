//! 로그인 실패 잠금 서비스 구현
//!
//! 비밀번호 오류 횟수를 추적하고 임계값 초과 시 계정을 제한합니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::domain::entities::users::user::{InvalidStatus, User};
use crate::errors::errors::AppError;
use crate::repositories::users::user_repo::UserRepository;

/// 잠금 전 허용되는 연속 실패 횟수
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// 실패 횟수에 대한 판정
///
/// 판정 자체는 순수 함수로 분리되어 있어 저장소 없이 검증할 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockoutOutcome {
    /// 아직 임계값 이내. 경고 메시지에 실릴 현재 실패 횟수
    Remaining(i32),
    /// 임계값 초과. 계정을 제한 상태로 전환해야 함
    Locked,
}

impl LockoutOutcome {
    /// 증가된 실패 횟수로부터 판정을 내립니다.
    ///
    /// 5회까지는 경고, 6회째부터 잠금입니다.
    pub fn assess(failed_count: i32) -> Self {
        if failed_count <= MAX_FAILED_ATTEMPTS {
            LockoutOutcome::Remaining(failed_count)
        } else {
            LockoutOutcome::Locked
        }
    }
}

/// 로그인 실패 잠금 서비스
///
/// 비밀번호 불일치마다 실패 카운터를 원자적으로 증가시키고,
/// 임계값 초과 시 계정을 제한합니다. 성공한 로그인은 카운터를 0으로 되돌립니다.
/// 증가와 초기화는 서로 다른 리포지토리 연산이므로 경로가 섞일 수 없습니다.
#[service(name = "lockout")]
pub struct LockoutService {
    /// 사용자 리포지토리
    user_repo: Arc<UserRepository>,
}

impl LockoutService {
    /// 제한된 계정인지 확인합니다.
    ///
    /// 잠긴 계정은 자격 검증에 들어가기 전에 거부됩니다.
    /// 올바른 비밀번호로도 통과할 수 없습니다.
    pub fn ensure_not_restricted(&self, user: &User) -> Result<(), AppError> {
        if user.is_restricted() {
            return Err(AppError::RestrictedAccount(
                "제한된 계정입니다. 고객센터로 문의해 주세요.".to_string(),
            ));
        }
        Ok(())
    }

    /// 비밀번호 불일치를 기록하고 거부 에러를 만들어 반환합니다.
    ///
    /// 임계값 이내면 잔여 기회가 담긴 경고를, 초과하면 계정을 제한하고
    /// 잠금 안내를 반환합니다. 반환값은 항상 에러이며 호출자가 그대로 전파합니다.
    pub async fn record_failure(&self, user: &User) -> AppError {
        let user_id = match user.id_string() {
            Some(id) => id,
            None => return AppError::InternalError("사용자 ID가 없습니다".to_string()),
        };

        let failed_count = match self.user_repo.increment_failed_logins(&user_id).await {
            Ok(count) => count,
            Err(e) => return e,
        };

        match LockoutOutcome::assess(failed_count) {
            LockoutOutcome::Remaining(count) => AppError::ValidationError(format!(
                "5회 로그인 실패시 로그인이 제한됩니다. ({}/{})",
                count, MAX_FAILED_ATTEMPTS
            )),
            LockoutOutcome::Locked => {
                if let Err(e) = self
                    .user_repo
                    .mark_invalid(&user_id, InvalidStatus::PasswordAttemptsExceeded)
                    .await
                {
                    log::error!("계정 제한 전환 실패 - user_id: {}, 에러: {}", user_id, e);
                }
                AppError::ValidationError(
                    "비밀번호 5회 이상 오류로 계정 로그인이 제한되었습니다.".to_string(),
                )
            }
        }
    }

    /// 성공한 로그인 직후 실패 카운터를 초기화합니다.
    pub async fn reset_on_success(&self, user: &User) -> Result<(), AppError> {
        let user_id = user.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;

        self.user_repo.reset_failed_logins(&user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_up_to_threshold() {
        for count in 1..=5 {
            assert_eq!(LockoutOutcome::assess(count), LockoutOutcome::Remaining(count));
        }
    }

    #[test]
    fn test_sixth_failure_locks() {
        assert_eq!(LockoutOutcome::assess(6), LockoutOutcome::Locked);
        assert_eq!(LockoutOutcome::assess(10), LockoutOutcome::Locked);
    }

    #[test]
    fn test_warning_message_format() {
        // (n/5) 형식이 그대로 유지되어야 클라이언트 파싱이 깨지지 않음
        let message = format!("5회 로그인 실패시 로그인이 제한됩니다. ({}/{})", 3, MAX_FAILED_ATTEMPTS);
        assert!(message.ends_with("(3/5)"));
    }
}

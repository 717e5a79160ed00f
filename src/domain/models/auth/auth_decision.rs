use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::TokenPair;

/// 요청 인증 판정 결과
///
/// 미들웨어의 인증 상태 기계가 요청을 통과시킬 때 내리는 판정입니다.
/// `rotated`가 Some이면 만료된 액세스 토큰이 리프레시 토큰으로
/// 투명하게 복구되었음을 의미하며, 응답에 새 토큰이 실려 나가야 합니다.
#[derive(Debug, Clone)]
pub struct AuthDecision {
    /// 인증된 주체
    pub principal: AuthenticatedUser,
    /// 복구 과정에서 새로 발급된 토큰 쌍
    pub rotated: Option<TokenPair>,
}

impl AuthDecision {
    /// 유효한 액세스 토큰으로 통과한 판정
    pub fn passed(principal: AuthenticatedUser) -> Self {
        Self { principal, rotated: None }
    }

    /// 리프레시 복구로 통과한 판정
    pub fn recovered(principal: AuthenticatedUser, pair: TokenPair) -> Self {
        Self { principal, rotated: Some(pair) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "507f1f77bcf86cd799439011".to_string(),
            role: None,
        }
    }

    #[test]
    fn test_passed_carries_no_rotated_pair() {
        let decision = AuthDecision::passed(principal());
        assert!(decision.rotated.is_none());
    }

    #[test]
    fn test_recovered_carries_rotated_pair() {
        let pair = TokenPair {
            access_token: "new-access".to_string(),
            refresh_token: "new-refresh".to_string(),
            expires_in: 1800,
        };
        let decision = AuthDecision::recovered(principal(), pair);
        let rotated = decision.rotated.as_ref().map(|p| p.access_token.as_str());
        assert_eq!(rotated, Some("new-access"));
    }
}

use actix_web::dev::ServiceRequest;

/// 리프레시 토큰 전달 방식을 결정하는 클라이언트 종류
///
/// 네이티브 앱은 쿠키 저장소가 없어 리프레시 토큰을 전용 헤더로 보내고,
/// 웹 브라우저는 HttpOnly 쿠키로 보냅니다.
/// 클라이언트는 `X-Client-Kind` 헤더로 자신의 종류를 선언합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    /// 네이티브 앱. 리프레시 토큰을 헤더로 전달
    Native,
    /// 웹 브라우저. 리프레시 토큰을 HttpOnly 쿠키로 전달
    Web,
}

impl ClientKind {
    /// 헤더 값에서 클라이언트 종류를 판별합니다.
    ///
    /// 헤더가 없거나 알 수 없는 값이면 Web으로 간주합니다.
    pub fn from_header(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("native") => ClientKind::Native,
            _ => ClientKind::Web,
        }
    }

    /// 요청에서 클라이언트 종류를 판별합니다.
    pub fn from_request(req: &ServiceRequest) -> Self {
        let value = req
            .headers()
            .get("X-Client-Kind")
            .and_then(|v| v.to_str().ok());
        Self::from_header(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_header() {
        assert_eq!(ClientKind::from_header(Some("native")), ClientKind::Native);
        assert_eq!(ClientKind::from_header(Some(" Native ")), ClientKind::Native);
    }

    #[test]
    fn test_missing_or_unknown_header_defaults_to_web() {
        assert_eq!(ClientKind::from_header(None), ClientKind::Web);
        assert_eq!(ClientKind::from_header(Some("web")), ClientKind::Web);
        assert_eq!(ClientKind::from_header(Some("dart")), ClientKind::Web);
    }
}

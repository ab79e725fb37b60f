//! 세션 토큰 모델
//!
//! 이 서비스가 직접 발급하는 액세스/리프레시 토큰의 클레임과 응답 타입입니다.
//! 두 토큰은 구조가 같고 만료 시간만 다릅니다.

use serde::{Deserialize, Serialize};

/// 세션 JWT 클레임
///
/// * `sub` - 회원 이메일
/// * `iat`, `exp` - 발급/만료 시각 (Unix seconds)
/// * `jti` - 토큰 고유 ID (UUID v4)
/// * `roles` - 비어 있으면 직렬화하지 않고, 없으면 빈 목록으로 읽습니다
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

/// 토큰 종류. 구조는 같고 TTL 만 다릅니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

/// 로그인 성공 시 발급되는 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// 액세스 토큰 유효 시간 (초)
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_omitted_when_empty() {
        let claims = SessionClaims {
            sub: "a@b.c".to_string(),
            iat: 1,
            exp: 2,
            jti: "id".to_string(),
            roles: vec![],
        };

        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("roles").is_none());

        let parsed: SessionClaims =
            serde_json::from_str(r#"{"sub":"a@b.c","iat":1,"exp":2,"jti":"id"}"#).unwrap();
        assert!(parsed.roles.is_empty());
    }
}

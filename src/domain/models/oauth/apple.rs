//! Sign in with Apple 프로토콜 모델
//!
//! - [`AppleTokenResponse`] - `/auth/token` 응답
//! - [`AppleClientSecretClaims`] - 토큰 엔드포인트 인증용 client secret
//! - [`AppleIdTokenClaims`] - Apple 이 서명한 ID 토큰의 클레임

use serde::{Deserialize, Serialize};

/// Apple 토큰 엔드포인트 응답
///
/// `id_token`만 필수이며 나머지는 참고용입니다.
#[derive(Debug, Clone, Deserialize)]
pub struct AppleTokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub id_token: String,
}

/// Apple client secret (ES256 JWT) 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppleClientSecretClaims {
    /// Team ID
    pub iss: String,
    /// Services ID (client id)
    pub sub: String,
    /// `https://appleid.apple.com`
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// Apple ID 토큰 클레임
///
/// `aud`는 문자열 또는 배열일 수 있어 `serde_json::Value`로 받습니다.
#[derive(Debug, Clone, Deserialize)]
pub struct AppleIdTokenClaims {
    pub iss: String,
    pub sub: String,
    #[serde(default)]
    pub aud: Option<serde_json::Value>,
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
}

/// ID 토큰 헤더에서 필요한 부분
#[derive(Debug, Clone, Deserialize)]
pub struct AppleIdTokenHeader {
    #[serde(default)]
    pub kid: Option<String>,
    #[serde(default)]
    pub alg: Option<String>,
}

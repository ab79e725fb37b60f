//! Kakao 로그인 프로토콜 모델

use serde::{Deserialize, Serialize};

/// Kakao 토큰 엔드포인트 요청 본문 (JSON)
#[derive(Debug, Clone, Serialize)]
pub struct KakaoTokenRequest<'a> {
    pub grant_type: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub code: &'a str,
    pub redirect_uri: &'a str,
}

/// Kakao 토큰 엔드포인트 응답
#[derive(Debug, Clone, Deserialize)]
pub struct KakaoTokenResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub refresh_token_expires_in: Option<i64>,
}

/// `/v2/user/me` 응답
///
/// 동의 항목에 따라 대부분의 필드가 비어 있을 수 있습니다.
#[derive(Debug, Clone, Deserialize)]
pub struct KakaoUserInfo {
    pub id: i64,
    #[serde(default)]
    pub properties: Option<KakaoProperties>,
    #[serde(default)]
    pub kakao_account: Option<KakaoAccount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KakaoProperties {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub thumbnail_image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KakaoAccount {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_needs_agreement: Option<bool>,
    #[serde(default)]
    pub is_email_valid: Option<bool>,
    #[serde(default)]
    pub is_email_verified: Option<bool>,
    #[serde(default)]
    pub profile: Option<KakaoProfile>,
    #[serde(default)]
    pub profile_nickname_needs_agreement: Option<bool>,
    #[serde(default)]
    pub profile_image_needs_agreement: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KakaoProfile {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub thumbnail_image_url: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub is_default_image: Option<bool>,
}

impl KakaoUserInfo {
    /// 동의된 이메일. 빈 문자열은 없는 것으로 취급합니다.
    pub fn email(&self) -> Option<&str> {
        self.kakao_account
            .as_ref()
            .and_then(|account| account.email.as_deref())
            .filter(|email| !email.is_empty())
    }

    /// `properties.nickname`, 없으면 `kakao_account.profile.nickname`
    pub fn nickname(&self) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|p| p.nickname.as_deref())
            .or_else(|| self.profile().and_then(|p| p.nickname.as_deref()))
    }

    /// `properties.profile_image`, 없으면 `kakao_account.profile.profile_image_url`
    pub fn profile_image(&self) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|p| p.profile_image.as_deref())
            .or_else(|| self.profile().and_then(|p| p.profile_image_url.as_deref()))
    }

    fn profile(&self) -> Option<&KakaoProfile> {
        self.kakao_account.as_ref().and_then(|a| a.profile.as_ref())
    }
}

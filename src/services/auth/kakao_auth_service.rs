//! Kakao 로그인 어댑터
//!
//! 두 번의 서버 간 호출로 신원 정보를 얻습니다.
//!
//! 1. `POST {token_uri}` (JSON) - 인가 코드를 액세스 토큰으로 교환
//! 2. `GET {user_info_uri}` (Bearer) - 사용자 정보 조회
//!
//! 서명 검증은 없습니다. 신뢰는 인증된 서버 간 직접 호출에 근거합니다.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::{AuthProvider, KakaoOAuthConfig};
use crate::domain::models::oauth::kakao::{KakaoTokenRequest, KakaoTokenResponse, KakaoUserInfo};
use crate::domain::models::oauth::ProviderIdentity;
use crate::errors::errors::{AppError, AppResult, ProviderExchangeError};
use crate::services::auth::provider::OAuthProvider;

/// Kakao 로그인 어댑터
pub struct KakaoAuthService {
    config: KakaoOAuthConfig,
    client: reqwest::Client,
}

impl KakaoAuthService {
    pub fn new(config: KakaoOAuthConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    async fn request_token(&self, code: &str) -> AppResult<KakaoTokenResponse> {
        let body = KakaoTokenRequest {
            grant_type: "authorization_code",
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            code,
            redirect_uri: &self.config.redirect_uri,
        };

        let response = self.client.post(&self.config.token_uri).json(&body).send().await;
        Self::read_json(response, "토큰 교환").await
    }

    async fn request_user_info(&self, access_token: &str) -> AppResult<KakaoUserInfo> {
        let response = self
            .client
            .get(&self.config.user_info_uri)
            .bearer_auth(access_token)
            .send()
            .await;
        Self::read_json(response, "사용자 정보 조회").await
    }

    /// 응답 상태를 확인하고 본문을 역직렬화합니다.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Result<reqwest::Response>,
        step: &str,
    ) -> AppResult<T> {
        let response = response
            .map_err(|e| AppError::exchange(AuthProvider::Kakao, ProviderExchangeError::from_reqwest(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(|e| {
                AppError::exchange(AuthProvider::Kakao, ProviderExchangeError::from_reqwest(e))
            })?;
            log::error!("❌ Kakao {} 실패 ({}): {}", step, status, body);
            return Err(AppError::exchange(
                AuthProvider::Kakao,
                ProviderExchangeError::Upstream { status: status.as_u16(), body },
            ));
        }

        response.json::<T>().await.map_err(|e| {
            log::warn!("Kakao {} 응답 읽기 실패: {}", step, e);
            AppError::exchange(AuthProvider::Kakao, ProviderExchangeError::from_reqwest(e))
        })
    }

    /// Kakao 사용자 정보를 정규화된 신원 정보로 변환합니다.
    ///
    /// 이메일은 사용자 동의가 있어야만 내려옵니다. 이메일이 없으면
    /// 회원을 식별할 수 없으므로 `IdentityExtraction` 에러입니다.
    fn to_identity(info: &KakaoUserInfo) -> AppResult<ProviderIdentity> {
        let email = info.email().ok_or_else(|| {
            AppError::IdentityExtraction(format!("Kakao 사용자 {} 의 이메일 동의가 없습니다", info.id))
        })?;

        Ok(ProviderIdentity {
            external_id: info.id.to_string(),
            email: email.to_string(),
            provider: AuthProvider::Kakao,
            nickname: info.nickname().map(str::to_string),
            profile_image: info.profile_image().map(str::to_string),
        })
    }
}

#[async_trait]
impl OAuthProvider for KakaoAuthService {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Kakao
    }

    async fn exchange_authorization_code(&self, code: &str) -> AppResult<ProviderIdentity> {
        let token = self.request_token(code).await?;
        let info = self.request_user_info(&token.access_token).await?;
        log::debug!("Kakao 사용자 정보 조회 완료: id={}", info.id);
        Self::to_identity(&info)
    }
}

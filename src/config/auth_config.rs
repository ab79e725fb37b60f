//! # Authentication Configuration Module
//!
//! 소셜 로그인 프로바이더(Apple, Kakao), 자체 세션 JWT, 프로바이더 호출용
//! HTTP 클라이언트 설정을 관리하는 모듈입니다.
//!
//! 각 설정은 필드를 가진 구조체이며 `from_env()`로 한 번 읽어 들인 뒤
//! 불변 값으로 서비스에 주입됩니다. 필수 값이 빠진 프로바이더는
//! `Ok(None)`을 반환하고 레지스트리에 등록되지 않습니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### Apple 로그인
//! ```bash
//! export APPLE_CLIENT_ID="com.example.service"
//! export APPLE_TEAM_ID="ABCDE12345"
//! export APPLE_KEY_ID="KEY1234567"
//! export APPLE_PRIVATE_KEY_PATH="/etc/secrets/AuthKey_KEY1234567.p8"
//! export APPLE_REDIRECT_URI="https://example.com/api/auth/apple/callback"
//! ```
//!
//! ### Kakao 로그인
//! ```bash
//! export KAKAO_CLIENT_ID="rest-api-key"
//! export KAKAO_CLIENT_SECRET="client-secret"
//! export KAKAO_REDIRECT_URI="https://example.com/api/auth/kakao/callback"
//! ```
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ACCESS_EXPIRY_SECONDS="3600"
//! export JWT_REFRESH_EXPIRY_SECONDS="1209600"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{AppleOAuthConfig, AuthProvider, Environment, JwtConfig};
//!
//! let jwt = JwtConfig::from_env(&Environment::current())?;
//! let apple = AppleOAuthConfig::from_env()?; // Option<AppleOAuthConfig>
//! let provider = AuthProvider::from_str("APPLE")?;
//! ```

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Environment;
use crate::errors::errors::{AppError, AppResult};

/// Apple 이 허용하는 client secret 최대 유효 기간 (6개월)
pub const APPLE_MAX_CLIENT_SECRET_EXPIRY_SECONDS: i64 = 15_777_000;

const DEFAULT_APPLE_TOKEN_URI: &str = "https://appleid.apple.com/auth/token";
const DEFAULT_APPLE_JWKS_URI: &str = "https://appleid.apple.com/auth/keys";
const DEFAULT_APPLE_AUDIENCE_URI: &str = "https://appleid.apple.com";
const DEFAULT_KAKAO_TOKEN_URI: &str = "https://kauth.kakao.com/oauth/token";
const DEFAULT_KAKAO_USER_INFO_URI: &str = "https://kapi.kakao.com/v2/user/me";

/// 비어 있지 않은 환경 변수 값을 반환합니다.
fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// 숫자형 설정값을 읽습니다. 값이 없으면 기본값, 파싱 실패는 `ConfigError`입니다.
pub(crate) fn parse_var<T, F>(lookup: &F, name: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::ConfigError(format!("{} 값이 올바르지 않습니다: {}", name, e))),
        None => Ok(default),
    }
}

/// 누락된 필수 변수 이름을 모아 경고를 남깁니다.
fn warn_missing(provider: AuthProvider, missing: &[&str]) {
    log::warn!(
        "⚠️ {} 로그인 비활성화: 환경 변수 누락 ({})",
        provider,
        missing.join(", ")
    );
}

/// Apple 로그인(Sign in with Apple) 설정
///
/// Apple Developer 콘솔에서 발급한 Services ID, Team ID, Key ID 와
/// `.p8` 개인 키를 사용합니다. 개인 키 자체는 이 구조체에 로드되지 않고
/// 첫 로그인 시 어댑터가 한 번만 읽어 들입니다.
///
/// ## 보안 고려사항
///
/// - `.p8` 키 내용은 절대 로그에 출력하지 마세요
/// - `client_secret_expiry_seconds`는 6개월(15,777,000초)을 넘을 수 없습니다
#[derive(Debug, Clone)]
pub struct AppleOAuthConfig {
    pub client_id: String,
    pub team_id: String,
    pub key_id: String,
    pub private_key: PrivateKeySource,
    pub redirect_uri: String,
    pub token_uri: String,
    pub jwks_uri: String,
    /// client secret 의 `aud`이자 ID 토큰의 기대 `iss`
    pub audience_uri: String,
    pub client_secret_expiry_seconds: i64,
    /// JWKS 캐시 유지 시간. `Duration::ZERO`면 매 검증마다 새로 가져옵니다.
    pub jwks_cache_ttl: Duration,
}

/// Apple 개인 키 위치
#[derive(Clone)]
pub enum PrivateKeySource {
    /// PEM 텍스트를 직접 보관 (`APPLE_PRIVATE_KEY`)
    Pem(String),
    /// `.p8` 파일 경로 (`APPLE_PRIVATE_KEY_PATH`)
    Path(PathBuf),
}

impl fmt::Debug for PrivateKeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrivateKeySource::Pem(_) => f.write_str("Pem(<redacted>)"),
            PrivateKeySource::Path(path) => f.debug_tuple("Path").field(path).finish(),
        }
    }
}

impl PrivateKeySource {
    /// 키 텍스트를 읽어옵니다. 파일을 읽지 못하면 `KeyLoad` 에러입니다.
    pub fn read(&self) -> AppResult<String> {
        match self {
            PrivateKeySource::Pem(pem) => Ok(pem.clone()),
            PrivateKeySource::Path(path) => std::fs::read_to_string(path).map_err(|e| {
                AppError::KeyLoad(format!("개인 키 파일을 읽을 수 없습니다 ({}): {}", path.display(), e))
            }),
        }
    }
}

impl AppleOAuthConfig {
    /// 환경 변수에서 Apple 설정을 읽습니다.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(config))` - 모든 필수 값이 있는 경우
    /// * `Ok(None)` - 필수 값이 하나라도 없는 경우 (경고 로그)
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 숫자 값 파싱 실패 또는 secret 유효 기간 초과
    pub fn from_env() -> AppResult<Option<Self>> {
        Self::from_lookup(env_var)
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> AppResult<Option<Self>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = lookup("APPLE_CLIENT_ID");
        let team_id = lookup("APPLE_TEAM_ID");
        let key_id = lookup("APPLE_KEY_ID");
        let redirect_uri = lookup("APPLE_REDIRECT_URI");
        let private_key = lookup("APPLE_PRIVATE_KEY")
            .map(PrivateKeySource::Pem)
            .or_else(|| lookup("APPLE_PRIVATE_KEY_PATH").map(|p| PrivateKeySource::Path(p.into())));

        let (Some(client_id), Some(team_id), Some(key_id), Some(redirect_uri), Some(private_key)) =
            (client_id.clone(), team_id.clone(), key_id.clone(), redirect_uri.clone(), private_key.clone())
        else {
            let missing: Vec<&str> = [
                ("APPLE_CLIENT_ID", client_id.is_none()),
                ("APPLE_TEAM_ID", team_id.is_none()),
                ("APPLE_KEY_ID", key_id.is_none()),
                ("APPLE_REDIRECT_URI", redirect_uri.is_none()),
                ("APPLE_PRIVATE_KEY | APPLE_PRIVATE_KEY_PATH", private_key.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();
            warn_missing(AuthProvider::Apple, &missing);
            return Ok(None);
        };

        let config = Self {
            client_id,
            team_id,
            key_id,
            private_key,
            redirect_uri,
            token_uri: lookup("APPLE_TOKEN_URI").unwrap_or_else(|| DEFAULT_APPLE_TOKEN_URI.to_string()),
            jwks_uri: lookup("APPLE_JWKS_URI").unwrap_or_else(|| DEFAULT_APPLE_JWKS_URI.to_string()),
            audience_uri: lookup("APPLE_AUDIENCE_URI")
                .unwrap_or_else(|| DEFAULT_APPLE_AUDIENCE_URI.to_string()),
            client_secret_expiry_seconds: parse_var(
                &lookup,
                "APPLE_CLIENT_SECRET_EXPIRY_SECONDS",
                APPLE_MAX_CLIENT_SECRET_EXPIRY_SECONDS,
            )?,
            jwks_cache_ttl: Duration::from_secs(parse_var(&lookup, "APPLE_JWKS_CACHE_TTL_SECONDS", 3600u64)?),
        };

        config.validate()?;
        Ok(Some(config))
    }

    /// client secret 유효 기간이 (0, 6개월] 범위인지 확인합니다.
    pub fn validate(&self) -> AppResult<()> {
        if self.client_secret_expiry_seconds <= 0
            || self.client_secret_expiry_seconds > APPLE_MAX_CLIENT_SECRET_EXPIRY_SECONDS
        {
            return Err(AppError::ConfigError(format!(
                "APPLE_CLIENT_SECRET_EXPIRY_SECONDS 는 1..={} 범위여야 합니다 (현재 {})",
                APPLE_MAX_CLIENT_SECRET_EXPIRY_SECONDS, self.client_secret_expiry_seconds
            )));
        }
        Ok(())
    }
}

/// Kakao 로그인 설정
///
/// Kakao Developers 의 REST API 키와 client secret 을 사용합니다.
#[derive(Debug, Clone)]
pub struct KakaoOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub token_uri: String,
    pub user_info_uri: String,
}

impl KakaoOAuthConfig {
    /// 환경 변수에서 Kakao 설정을 읽습니다. 필수 값이 없으면 `Ok(None)`입니다.
    pub fn from_env() -> AppResult<Option<Self>> {
        Ok(Self::from_lookup(env_var))
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = lookup("KAKAO_CLIENT_ID");
        let client_secret = lookup("KAKAO_CLIENT_SECRET");
        let redirect_uri = lookup("KAKAO_REDIRECT_URI");

        match (client_id, client_secret, redirect_uri) {
            (Some(client_id), Some(client_secret), Some(redirect_uri)) => Some(Self {
                client_id,
                client_secret,
                redirect_uri,
                token_uri: lookup("KAKAO_TOKEN_URI").unwrap_or_else(|| DEFAULT_KAKAO_TOKEN_URI.to_string()),
                user_info_uri: lookup("KAKAO_USER_INFO_URI")
                    .unwrap_or_else(|| DEFAULT_KAKAO_USER_INFO_URI.to_string()),
            }),
            (client_id, client_secret, redirect_uri) => {
                let missing: Vec<&str> = [
                    ("KAKAO_CLIENT_ID", client_id.is_none()),
                    ("KAKAO_CLIENT_SECRET", client_secret.is_none()),
                    ("KAKAO_REDIRECT_URI", redirect_uri.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                warn_missing(AuthProvider::Kakao, &missing);
                None
            }
        }
    }
}

/// JWT 토큰 설정
///
/// 서명 키 규칙: HMAC-SHA256 키 바이트는 `JWT_SECRET` UTF-8 바이트를
/// 표준 base64 로 **인코딩**한 문자열입니다. 발급과 검증 모두 같은 규칙을 씁니다.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_expiry_seconds: i64,
    pub refresh_expiry_seconds: i64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_expiry_seconds", &self.access_expiry_seconds)
            .field("refresh_expiry_seconds", &self.refresh_expiry_seconds)
            .finish()
    }
}

impl JwtConfig {
    /// 환경 변수에서 JWT 설정을 읽습니다.
    ///
    /// 개발/테스트 환경에서는 `JWT_SECRET`이 없을 때 기본값을 사용하고 경고를 남깁니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 스테이징/프로덕션에서 `JWT_SECRET` 누락, 또는 잘못된 만료 값
    pub fn from_env(environment: &Environment) -> AppResult<Self> {
        Self::from_lookup(environment, env_var)
    }

    pub(crate) fn from_lookup<F>(environment: &Environment, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = match lookup("JWT_SECRET") {
            Some(secret) => secret,
            None if matches!(environment, Environment::Development | Environment::Test) => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            }
            None => return Err(AppError::ConfigError("JWT_SECRET must be set".to_string())),
        };

        let config = Self {
            secret,
            access_expiry_seconds: parse_var(&lookup, "JWT_ACCESS_EXPIRY_SECONDS", 3600)?,
            refresh_expiry_seconds: parse_var(&lookup, "JWT_REFRESH_EXPIRY_SECONDS", 1_209_600)?,
        };

        if config.access_expiry_seconds <= 0 || config.refresh_expiry_seconds <= 0 {
            return Err(AppError::ConfigError("JWT 만료 시간은 0보다 커야 합니다".to_string()));
        }

        Ok(config)
    }
}

/// 프로바이더 호출용 공유 HTTP 클라이언트 설정
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub timeout: Duration,
}

impl HttpClientConfig {
    pub fn from_env() -> AppResult<Self> {
        let seconds: u64 = parse_var(&env_var, "OAUTH_HTTP_TIMEOUT_SECONDS", 10)?;
        Ok(Self { timeout: Duration::from_secs(seconds) })
    }

    /// 타임아웃이 적용된 `reqwest::Client`를 생성합니다.
    ///
    /// 클라이언트는 내부적으로 커넥션 풀을 공유하므로 프로세스당 하나만 만듭니다.
    pub fn build_client(&self) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("social_auth_backend/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::ConfigError(format!("HTTP 클라이언트 생성 실패: {}", e)))
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(10) }
    }
}

/// 인증 프로바이더 열거형
///
/// 소셜 로그인 프로바이더 키를 나타냅니다. 외부 입력(URL 경로)은
/// 대소문자를 구분하지 않고 해석되며, 직렬화 시에는 `"APPLE"`, `"KAKAO"` 형태입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthProvider {
    /// Sign in with Apple
    Apple,

    /// Kakao 로그인
    Kakao,
}

impl AuthProvider {
    /// 문자열에서 AuthProvider로 변환합니다. 대소문자를 구분하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UnsupportedProvider` - 알 수 없는 프로바이더 키
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// assert_eq!(AuthProvider::from_str("Apple")?, AuthProvider::Apple);
    /// assert!(AuthProvider::from_str("naver").is_err());
    /// ```
    pub fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "apple" => Ok(AuthProvider::Apple),
            "kakao" => Ok(AuthProvider::Kakao),
            _ => Err(AppError::UnsupportedProvider(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Apple => "apple",
            AuthProvider::Kakao => "kakao",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

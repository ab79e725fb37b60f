//! JWKS 공개 키 조회
//!
//! 프로바이더가 공개한 키 세트(`{ "keys": [...] }`)를 가져와 `kid`로 키를 찾고,
//! RSA modulus/exponent 로 검증 키를 만듭니다.
//!
//! ## 캐시 정책
//!
//! - `ttl == 0` 이면 캐시하지 않고 검증마다 새로 가져옵니다.
//! - `ttl > 0` 이면 읽기 위주 캐시를 사용합니다. 만료되면 한 태스크만
//!   다시 가져오고(single-flight), 나머지는 그 결과를 공유합니다.
//! - 캐시된 세트에 없는 `kid`가 들어오면 키 교체로 보고, 마지막 갱신 후
//!   [`ROTATION_COOLDOWN`]이 지난 경우에만 한 번 강제로 다시 가져옵니다.
//!
//! 캐시 잠금(`std::sync::RwLock`)은 네트워크 호출 동안 잡고 있지 않습니다.
//! 갱신 직렬화는 별도의 `tokio::sync::Mutex`가 담당합니다.

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::DecodingKey;
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPublicKey};
use tokio::sync::Mutex;

use crate::config::AuthProvider;
use crate::domain::models::oauth::{Jwk, JwkSet};
use crate::errors::errors::{AppError, AppResult, ProviderExchangeError};

/// 알 수 없는 `kid`로 인한 강제 갱신 최소 간격
pub const ROTATION_COOLDOWN: Duration = Duration::from_secs(30);

#[derive(Clone)]
struct CachedKeySet {
    keys: Arc<JwkSet>,
    generation: u64,
    fetched_at: Instant,
}

/// 프로바이더 JWKS 엔드포인트 조회기
pub struct JwksResolver {
    provider: AuthProvider,
    client: reqwest::Client,
    jwks_uri: String,
    ttl: Duration,
    rotation_cooldown: Duration,
    cache: RwLock<Option<CachedKeySet>>,
    refill: Mutex<()>,
}

impl JwksResolver {
    pub fn new(provider: AuthProvider, client: reqwest::Client, jwks_uri: impl Into<String>, ttl: Duration) -> Self {
        Self {
            provider,
            client,
            jwks_uri: jwks_uri.into(),
            ttl,
            rotation_cooldown: ROTATION_COOLDOWN,
            cache: RwLock::new(None),
            refill: Mutex::new(()),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_rotation_cooldown(mut self, cooldown: Duration) -> Self {
        self.rotation_cooldown = cooldown;
        self
    }

    /// `kid`에 해당하는 키를 찾습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ProviderExchange` - JWKS 엔드포인트 호출 실패
    /// * `AppError::JwksLookup` - 키 세트에 `kid`가 없음
    pub async fn resolve(&self, kid: &str) -> AppResult<Jwk> {
        let snapshot = self.key_set(None).await?;
        if let Some(jwk) = snapshot.keys.find(kid) {
            return Ok(jwk.clone());
        }

        if !self.ttl.is_zero() && snapshot.fetched_at.elapsed() >= self.rotation_cooldown {
            log::info!("🔄 {} JWKS 에 kid={} 가 없어 키 세트를 다시 가져옵니다", self.provider, kid);
            let refreshed = self.key_set(Some(snapshot.generation)).await?;
            if let Some(jwk) = refreshed.keys.find(kid) {
                return Ok(jwk.clone());
            }
        }

        Err(AppError::JwksLookup(format!(
            "{} JWKS 에서 kid={} 를 찾을 수 없습니다",
            self.provider, kid
        )))
    }

    /// 키 세트를 반환합니다.
    ///
    /// `stale_generation`이 주어지면 그 세대의 캐시는 무시하고 새로 가져옵니다.
    async fn key_set(&self, stale_generation: Option<u64>) -> AppResult<CachedKeySet> {
        if self.ttl.is_zero() {
            let keys = self.fetch().await?;
            return Ok(CachedKeySet { keys: Arc::new(keys), generation: 0, fetched_at: Instant::now() });
        }

        if let Some(cached) = self.usable(stale_generation) {
            return Ok(cached);
        }

        let _guard = self.refill.lock().await;

        // 대기하는 동안 다른 태스크가 갱신했을 수 있음
        if let Some(cached) = self.usable(stale_generation) {
            return Ok(cached);
        }

        let keys = Arc::new(self.fetch().await?);
        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        let generation = cache.as_ref().map_or(1, |c| c.generation + 1);
        let entry = CachedKeySet { keys, generation, fetched_at: Instant::now() };
        *cache = Some(entry.clone());
        Ok(entry)
    }

    fn usable(&self, stale_generation: Option<u64>) -> Option<CachedKeySet> {
        let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
        cache
            .as_ref()
            .filter(|c| c.fetched_at.elapsed() < self.ttl)
            .filter(|c| stale_generation.is_none_or(|stale| c.generation > stale))
            .cloned()
    }

    async fn fetch(&self) -> AppResult<JwkSet> {
        let response = self
            .client
            .get(&self.jwks_uri)
            .send()
            .await
            .map_err(|e| AppError::exchange(self.provider, ProviderExchangeError::from_reqwest(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| AppError::exchange(self.provider, ProviderExchangeError::from_reqwest(e)))?;
            log::error!("{} JWKS 조회 실패 ({}): {}", self.provider, status, body);
            return Err(AppError::exchange(
                self.provider,
                ProviderExchangeError::Upstream { status: status.as_u16(), body },
            ));
        }

        let keys: JwkSet = response
            .json()
            .await
            .map_err(|e| AppError::exchange(self.provider, ProviderExchangeError::from_reqwest(e)))?;

        log::debug!(
            "{} JWKS 로드: kid=[{}]",
            self.provider,
            keys.keys.iter().map(|k| k.kid.as_str()).collect::<Vec<_>>().join(", ")
        );
        Ok(keys)
    }
}

/// JWK 의 modulus/exponent 로 RS256 검증 키를 만듭니다.
///
/// `n`, `e`는 base64url 빅엔디언 부호 없는 정수로 해석합니다.
///
/// # Errors
///
/// * `AppError::JwksLookup` - RSA 키가 아니거나 `n`/`e`가 없거나 올바르지 않은 경우
pub fn rsa_decoding_key(jwk: &Jwk) -> AppResult<DecodingKey> {
    if jwk.kty != "RSA" {
        return Err(AppError::JwksLookup(format!("kid={} 는 RSA 키가 아닙니다 ({})", jwk.kid, jwk.kty)));
    }

    let decode = |value: Option<&str>, name: &str| {
        let value = value.ok_or_else(|| AppError::JwksLookup(format!("kid={} 에 {} 값이 없습니다", jwk.kid, name)))?;
        URL_SAFE_NO_PAD
            .decode(value.trim_end_matches('='))
            .map_err(|e| AppError::JwksLookup(format!("kid={} 의 {} 디코딩 실패: {}", jwk.kid, name, e)))
    };

    let modulus = BigUint::from_bytes_be(&decode(jwk.n.as_deref(), "n")?);
    let exponent = BigUint::from_bytes_be(&decode(jwk.e.as_deref(), "e")?);
    let public_key = RsaPublicKey::new(modulus, exponent)
        .map_err(|e| AppError::JwksLookup(format!("kid={} RSA 키 생성 실패: {}", jwk.kid, e)))?;

    Ok(DecodingKey::from_rsa_raw_components(
        &public_key.n().to_bytes_be(),
        &public_key.e().to_bytes_be(),
    ))
}

//! # Provider Registry
//!
//! 프로바이더 키(`"apple"`, `"kakao"`)를 어댑터로 매핑하는 불변 레지스트리입니다.
//!
//! 기동 시 [`AppContext`](crate::core::context::AppContext)가 설정된 어댑터만
//! 등록해 한 번 만들고, 이후에는 읽기만 하므로 잠금 없이 여러 워커가 공유합니다.
//! 타입 이름 기반 런타임 조회나 전역 컨테이너는 사용하지 않습니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `Map<Provider, OAuth2Service>` 빈 주입 | `ProviderRegistry::builder().register(..)` |
//! | `Converter<String, Provider>` | `AuthProvider::from_str` (대소문자 무시) |
//! | `IllegalArgumentException` | `AppError::UnsupportedProvider` (400) |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let registry = ProviderRegistry::builder()
//!     .register(Arc::new(AppleAuthService::new(apple_config, client.clone())))
//!     .register(Arc::new(KakaoAuthService::new(kakao_config, client)))
//!     .build();
//!
//! let adapter = registry.resolve("kakao")?;
//! let identity = adapter.exchange_authorization_code(code).await?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::AuthProvider;
use crate::errors::errors::{AppError, AppResult};
use crate::services::auth::provider::OAuthProvider;

/// 프로바이더 어댑터 레지스트리
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<AuthProvider, Arc<dyn OAuthProvider>>,
}

impl ProviderRegistry {
    pub fn builder() -> ProviderRegistryBuilder {
        ProviderRegistryBuilder::default()
    }

    /// 프로바이더 키로 어댑터를 찾습니다. 키는 대소문자를 구분하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UnsupportedProvider` - 알 수 없는 키이거나 설정되지 않은 프로바이더
    pub fn resolve(&self, provider_key: &str) -> AppResult<Arc<dyn OAuthProvider>> {
        let provider = AuthProvider::from_str(provider_key)?;
        self.providers
            .get(&provider)
            .cloned()
            .ok_or_else(|| AppError::UnsupportedProvider(provider_key.to_string()))
    }

    /// 등록된 프로바이더 목록
    pub fn registered(&self) -> Vec<AuthProvider> {
        let mut providers: Vec<AuthProvider> = self.providers.keys().copied().collect();
        providers.sort_by_key(|p| p.as_str());
        providers
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

/// [`ProviderRegistry`] 빌더. `build()` 이후에는 변경할 수 없습니다.
#[derive(Default)]
pub struct ProviderRegistryBuilder {
    providers: HashMap<AuthProvider, Arc<dyn OAuthProvider>>,
}

impl ProviderRegistryBuilder {
    /// 어댑터를 등록합니다. 같은 프로바이더를 다시 등록하면 나중 것이 남습니다.
    pub fn register(mut self, adapter: Arc<dyn OAuthProvider>) -> Self {
        let provider = adapter.provider();
        if self.providers.insert(provider, adapter).is_some() {
            log::warn!("{} 어댑터가 중복 등록되어 교체되었습니다", provider);
        }
        self
    }

    pub fn build(self) -> ProviderRegistry {
        ProviderRegistry { providers: self.providers }
    }
}

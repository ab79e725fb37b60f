//! 소셜 로그인 프로바이더 추상화
//!
//! 새 프로바이더는 [`OAuthProvider`] 하나만 구현하고
//! [`ProviderRegistry`](crate::core::registry::ProviderRegistry)에 등록하면 됩니다.

use async_trait::async_trait;

use crate::config::AuthProvider;
use crate::domain::models::oauth::ProviderIdentity;
use crate::errors::errors::AppResult;

/// 인가 코드를 정규화된 신원 정보로 교환하는 프로바이더 어댑터
///
/// # Errors
///
/// 구현체는 다음 에러를 그대로 반환해야 합니다.
///
/// * `AppError::ProviderExchange` - 프로바이더 비정상 응답, 네트워크 오류, 타임아웃
/// * `AppError::IdentityExtraction` - 응답에 필수 식별 정보가 없음
/// * 그 외 프로바이더별 검증 에러 (`KeyLoad`, `JwksLookup`, `TokenValidation` 등)
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// 이 어댑터가 담당하는 프로바이더
    fn provider(&self) -> AuthProvider;

    /// 인가 코드를 교환해 [`ProviderIdentity`]를 만듭니다.
    async fn exchange_authorization_code(&self, code: &str) -> AppResult<ProviderIdentity>;
}

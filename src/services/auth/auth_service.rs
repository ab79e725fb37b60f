//! 소셜 로그인 오케스트레이터
//!
//! ```text
//! provider key ──▶ ProviderRegistry::resolve
//!                        │
//!                        ▼
//!     OAuthProvider::exchange_authorization_code(code)
//!                        │ ProviderIdentity
//!                        ▼
//!        MemberService::find_or_register(identity)
//!                        │ Member
//!                        ▼
//!        TokenService::generate_token_pair(member)
//! ```
//!
//! 각 단계의 에러는 변환 없이 그대로 호출자에게 전달됩니다.

use std::sync::Arc;

use crate::core::registry::ProviderRegistry;
use crate::domain::entities::members::Member;
use crate::domain::models::token::TokenPair;
use crate::errors::errors::AppResult;
use crate::services::auth::token_service::TokenService;
use crate::services::members::MemberService;

/// 로그인 결과
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub member: Member,
    pub tokens: TokenPair,
}

/// 소셜 로그인 전체 흐름을 담당하는 서비스
pub struct AuthService {
    registry: Arc<ProviderRegistry>,
    member_service: Arc<MemberService>,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(
        registry: Arc<ProviderRegistry>,
        member_service: Arc<MemberService>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self { registry, member_service, token_service }
    }

    /// 인가 코드로 로그인하고 세션 토큰을 발급합니다.
    ///
    /// # Arguments
    ///
    /// * `provider_key` - URL 경로의 프로바이더 키 (대소문자 무시)
    /// * `code` - 프로바이더가 발급한 인가 코드
    ///
    /// # Errors
    ///
    /// 레지스트리, 어댑터, 회원 저장소, 토큰 서비스의 에러를 그대로 반환합니다.
    pub async fn handle_login(&self, provider_key: &str, code: &str) -> AppResult<LoginResult> {
        let adapter = self.registry.resolve(provider_key)?;
        let identity = adapter.exchange_authorization_code(code).await?;
        let member = self.member_service.find_or_register(&identity).await?;
        let tokens = self.token_service.generate_token_pair(&member)?;

        log::info!(
            "✅ 로그인 성공: provider={}, member={}",
            identity.provider,
            member.id_string().unwrap_or_default()
        );

        Ok(LoginResult { member, tokens })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::config::{AuthProvider, JwtConfig};
    use crate::domain::models::oauth::ProviderIdentity;
    use crate::errors::errors::{AppError, ProviderExchangeError};
    use crate::repositories::members::InMemoryMemberRepository;
    use crate::services::auth::provider::OAuthProvider;

    struct StubKakao;

    #[async_trait]
    impl OAuthProvider for StubKakao {
        fn provider(&self) -> AuthProvider {
            AuthProvider::Kakao
        }

        async fn exchange_authorization_code(&self, code: &str) -> AppResult<ProviderIdentity> {
            match code {
                "good-code" => Ok(ProviderIdentity::new("123456789", "test@kakao.com", AuthProvider::Kakao)),
                _ => Err(AppError::exchange(
                    AuthProvider::Kakao,
                    ProviderExchangeError::Upstream { status: 400, body: "KOE320".to_string() },
                )),
            }
        }
    }

    fn auth_service() -> (AuthService, Arc<TokenService>) {
        let token_service = Arc::new(TokenService::new(&JwtConfig {
            secret: "orchestrator-secret".to_string(),
            access_expiry_seconds: 3600,
            refresh_expiry_seconds: 1_209_600,
        }));
        let registry = Arc::new(ProviderRegistry::builder().register(Arc::new(StubKakao)).build());
        let members = Arc::new(MemberService::new(Arc::new(InMemoryMemberRepository::new())));

        (AuthService::new(registry, members, token_service.clone()), token_service)
    }

    #[tokio::test]
    async fn test_handle_login_issues_tokens_for_member() {
        let (service, tokens) = auth_service();

        let result = service.handle_login("kakao", "good-code").await.unwrap();

        assert_eq!(result.member.email, "test@kakao.com");
        assert_eq!(tokens.get_subject(&result.tokens.access_token).unwrap(), "test@kakao.com");
        assert_eq!(tokens.get_subject(&result.tokens.refresh_token).unwrap(), "test@kakao.com");
    }

    #[tokio::test]
    async fn test_repeated_login_yields_same_member() {
        let (service, _) = auth_service();

        let first = service.handle_login("KAKAO", "good-code").await.unwrap();
        let second = service.handle_login("kakao", "good-code").await.unwrap();

        assert_eq!(first.member.id, second.member.id);
    }

    #[tokio::test]
    async fn test_errors_propagate_unmodified() {
        let (service, _) = auth_service();

        assert!(matches!(
            service.handle_login("naver", "good-code").await,
            Err(AppError::UnsupportedProvider(_))
        ));
        assert!(matches!(
            service.handle_login("kakao", "bad-code").await,
            Err(AppError::ProviderExchange {
                provider: AuthProvider::Kakao,
                source: ProviderExchangeError::Upstream { status: 400, .. },
            })
        ));
    }
}

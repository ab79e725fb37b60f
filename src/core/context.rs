//! # Application Context
//!
//! 기동 시 한 번 모든 컴포넌트를 명시적으로 생성하고 연결하는 조립 지점입니다.
//! 생성된 서비스는 `Arc`로 공유되어 `web::Data`로 핸들러와 미들웨어에 전달됩니다.
//!
//! ## 조립 순서
//!
//! ```text
//! AppConfig::from_env()
//!   ├─ HttpClientConfig ─▶ reqwest::Client (프로바이더 공용)
//!   ├─ JwtConfig ───────▶ TokenService
//!   ├─ DatabaseConfig ──▶ MemberRepository (mongo | memory) ─▶ MemberService
//!   ├─ Apple / Kakao ───▶ 설정된 어댑터만 ProviderRegistry 에 등록
//!   └────────────────────▶ AuthService
//! ```
//!
//! 설정이 없는 프로바이더는 등록되지 않고, 해당 키로 들어온 요청은
//! `UnsupportedProvider`(400)로 응답합니다.

use std::sync::Arc;

use log::{error, info, warn};

use crate::config::{
    AppleOAuthConfig, DatabaseConfig, Environment, HttpClientConfig, JwtConfig, KakaoOAuthConfig,
    MemberStoreKind,
};
use crate::core::registry::ProviderRegistry;
use crate::db::Database;
use crate::errors::errors::AppResult;
use crate::repositories::members::{InMemoryMemberRepository, MemberRepository, MongoMemberRepository};
use crate::services::auth::{AppleAuthService, AuthService, KakaoAuthService, OAuthProvider, TokenService};
use crate::services::members::MemberService;

/// 서비스 조립에 필요한 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub jwt: JwtConfig,
    pub http: HttpClientConfig,
    pub database: DatabaseConfig,
    pub apple: Option<AppleOAuthConfig>,
    pub kakao: Option<KakaoOAuthConfig>,
}

impl AppConfig {
    /// 환경 변수에서 모든 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 필수 값 누락 또는 잘못된 값
    pub fn from_env() -> AppResult<Self> {
        let environment = Environment::current();
        info!("🔧 실행 환경: {:?}", environment);

        Ok(Self {
            jwt: JwtConfig::from_env(&environment)?,
            http: HttpClientConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            apple: AppleOAuthConfig::from_env()?,
            kakao: KakaoOAuthConfig::from_env()?,
            environment,
        })
    }
}

/// 조립이 끝난 애플리케이션 컴포넌트
#[derive(Clone)]
pub struct AppContext {
    pub token_service: Arc<TokenService>,
    pub auth_service: Arc<AuthService>,
    pub registry: Arc<ProviderRegistry>,
}

impl AppContext {
    /// 설정으로부터 모든 컴포넌트를 생성합니다.
    ///
    /// Apple 개인 키는 여기서 미리 읽어 둡니다. 실패해도 기동은 계속되며,
    /// Apple 로그인 요청이 `KeyLoad` 에러로 실패합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - HTTP 클라이언트 생성 실패
    /// * `AppError::DatabaseError` - MongoDB 연결 또는 인덱스 생성 실패
    pub async fn build(config: AppConfig) -> AppResult<Self> {
        let client = config.http.build_client()?;
        let token_service = Arc::new(TokenService::new(&config.jwt));

        let repository: Arc<dyn MemberRepository> = match config.database.store {
            MemberStoreKind::Mongo => {
                info!("📡 데이터베이스 연결 중...");
                let database = Database::connect(&config.database).await?;
                let repository = MongoMemberRepository::new(&database);
                repository.create_indexes().await?;
                Arc::new(repository)
            }
            MemberStoreKind::Memory => {
                warn!("⚠️ 인메모리 회원 저장소 사용 중. 재시작하면 회원 정보가 사라집니다");
                Arc::new(InMemoryMemberRepository::new())
            }
        };

        let mut builder = ProviderRegistry::builder();

        if let Some(apple_config) = config.apple {
            let apple = AppleAuthService::new(apple_config, client.clone());
            if let Err(e) = apple.preload_signing_key() {
                error!("❌ Apple 개인 키 로드 실패, Apple 로그인이 실패합니다: {}", e);
            }
            builder = builder.register(Arc::new(apple) as Arc<dyn OAuthProvider>);
        }

        if let Some(kakao_config) = config.kakao {
            builder = builder.register(Arc::new(KakaoAuthService::new(kakao_config, client)));
        }

        let registry = builder.build();
        if registry.is_empty() {
            warn!("⚠️ 설정된 소셜 로그인 프로바이더가 없습니다. 모든 로그인 요청이 거부됩니다");
        } else {
            info!("🔐 등록된 프로바이더: {:?}", registry.registered());
        }

        Ok(Self::from_parts(registry, repository, token_service))
    }

    /// 이미 만들어진 구성 요소로 컨텍스트를 조립합니다.
    pub fn from_parts(
        registry: ProviderRegistry,
        repository: Arc<dyn MemberRepository>,
        token_service: Arc<TokenService>,
    ) -> Self {
        let registry = Arc::new(registry);
        let member_service = Arc::new(MemberService::new(repository));
        let auth_service = Arc::new(AuthService::new(
            registry.clone(),
            member_service,
            token_service.clone(),
        ));

        Self { token_service, auth_service, registry }
    }
}

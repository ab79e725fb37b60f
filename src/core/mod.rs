//! # Core Module
//!
//! 애플리케이션 조립과 프로바이더 디스패치를 담당합니다.
//!
//! ## 모듈 구성
//!
//! ### [`context`] - 조립 지점
//! - **AppConfig**: 환경 변수에서 읽은 전체 설정
//! - **AppContext**: 기동 시 한 번 생성되는 서비스 묶음
//!
//! ### [`registry`] - 프로바이더 레지스트리
//! - **ProviderRegistry**: 프로바이더 키 → 어댑터 매핑 (불변, 잠금 없음)
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 모듈 |
//! |--------|---------|
//! | `ApplicationContext` | `AppContext` |
//! | `@Configuration` + `@Bean` | `AppContext::build` |
//! | `@Autowired` | 생성자 인자로 `Arc<T>` 전달 |
//!
//! 전역 싱글톤이나 타입 이름 기반 조회는 사용하지 않습니다. 모든 의존성은
//! 생성자에서 명시적으로 전달되므로 테스트에서 스텁으로 쉽게 교체할 수 있습니다.
//!
//! ```rust,ignore
//! let config = AppConfig::from_env()?;
//! let context = AppContext::build(config).await?;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(web::Data::from(context.auth_service.clone()))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod context;
pub mod registry;

pub use context::*;
pub use registry::*;

//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경 관련 설정
//! - [`auth_config`] - 인증, OAuth, JWT 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//! 
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//! Spring Profile과 유사한 방식으로 동작합니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 프로덕션에서는 필수 설정값 누락 시 `ConfigError`로 기동 중단
//!
//! ### 3. 타입 안전성 (Type Safety)
//!
//! - 설정값의 타입 검증
//! - 파싱 실패는 조용히 기본값으로 바꾸지 않고 에러로 보고
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, JwtConfig, AppleOAuthConfig};
//!
//! let env = Environment::current();
//! let server = ServerConfig::from_env()?;
//! let jwt = JwtConfig::from_env(&env)?;
//!
//! // 필수 값이 없으면 None, 해당 프로바이더는 등록되지 않습니다
//! if let Some(apple) = AppleOAuthConfig::from_env()? {
//!     println!("Apple client: {}", apple.client_id);
//! }
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@ConfigurationProperties` | `from_env()` 구조체 |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env` 파일 |
//! | `@ConditionalOnProperty` | `Option<AppleOAuthConfig>` |

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

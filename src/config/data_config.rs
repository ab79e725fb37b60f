//! # Data & Server Configuration Module
//!
//! 실행 환경, HTTP 서버, 회원 저장소 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"        # development, test, staging, production
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export WORKERS="4"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://localhost:8080"
//! export MEMBER_STORE="mongo"             # mongo | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="social_auth_dev"
//! ```

use std::env;

use crate::config::auth_config::parse_var;
use crate::errors::errors::{AppError, AppResult};

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// 애플리케이션 실행 환경
///
/// ## 환경별 특징
///
/// - **Development**: `JWT_SECRET` 기본값 허용, 상세 로그
/// - **Test**: 개발과 동일
/// - **Staging / Production**: 모든 비밀 값이 필수
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 변수에서 현재 환경을 판단합니다. 기본값은 Production 입니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// HTTP 서버 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst_size: u32,
    pub cors_allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(env_var)
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| {
                vec![
                    "http://localhost:3000".to_string(),
                    "http://127.0.0.1:3000".to_string(),
                    "http://localhost:8080".to_string(),
                    "http://127.0.0.1:8080".to_string(),
                ]
            });

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var(&lookup, "PORT", 8080)?,
            workers: parse_var(&lookup, "WORKERS", 4)?,
            rate_limit_per_second: parse_var(&lookup, "RATE_LIMIT_PER_SECOND", 100)?,
            rate_limit_burst_size: parse_var(&lookup, "RATE_LIMIT_BURST_SIZE", 200)?,
            cors_allowed_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 회원 저장소 종류
#[derive(Debug, Clone, PartialEq)]
pub enum MemberStoreKind {
    Mongo,
    Memory,
}

/// 회원 저장소 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub store: MemberStoreKind,
    pub mongodb_uri: String,
    pub database_name: String,
}

impl DatabaseConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(env_var)
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("MEMBER_STORE").map(|s| s.to_lowercase()).as_deref() {
            None | Some("mongo") | Some("mongodb") => MemberStoreKind::Mongo,
            Some("memory") => MemberStoreKind::Memory,
            Some(other) => {
                return Err(AppError::ConfigError(format!("지원하지 않는 MEMBER_STORE: {}", other)));
            }
        };

        Ok(Self {
            store,
            mongodb_uri: lookup("MONGODB_URI").unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: lookup("DATABASE_NAME").unwrap_or_else(|| "social_auth_dev".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.workers, 4);
        assert_eq!(config.rate_limit_per_second, 100);
        assert_eq!(config.rate_limit_burst_size, 200);
        assert_eq!(config.cors_allowed_origins.len(), 4);
    }

    #[test]
    fn test_server_config_parses_origins() {
        let config = ServerConfig::from_lookup(|name| match name {
            "CORS_ALLOWED_ORIGINS" => Some("https://a.example, https://b.example,".to_string()),
            "PORT" => Some("9090".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.cors_allowed_origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_database_config_store_kind() {
        let memory = DatabaseConfig::from_lookup(|name| {
            (name == "MEMBER_STORE").then(|| "Memory".to_string())
        })
        .unwrap();
        assert_eq!(memory.store, MemberStoreKind::Memory);

        let default = DatabaseConfig::from_lookup(|_| None).unwrap();
        assert_eq!(default.store, MemberStoreKind::Mongo);

        assert!(DatabaseConfig::from_lookup(|_| Some("redis".to_string())).is_err());
    }
}

//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 소셜 로그인 교환, 세션 토큰 검증, 회원 저장소에서 발생하는 모든 실패를
//! 하나의 [`AppError`]로 모읍니다. `thiserror`로 `Error`를 구현하고
//! `actix_web::ResponseError`로 HTTP 응답 변환을 담당합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `UnsupportedProvider`, `ValidationError` | 400 |
//! | `MalformedToken`, `TokenValidation`, `AuthenticationError` | 401 |
//! | `ProviderExchange` (업스트림 4xx) | 업스트림 상태 그대로 |
//! | `ProviderExchange` (그 외), `IdentityExtraction`, `JwksLookup` | 502 |
//! | `ConflictError` | 409 |
//! | 나머지 | 500 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, AppResult};
//!
//! fn resolve(key: &str) -> AppResult<AuthProvider> {
//!     AuthProvider::from_str(key)
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::config::AuthProvider;

/// 세션 토큰 또는 프로바이더 ID 토큰 검증 실패 종류
///
/// 서명 불일치와 만료는 항상 구분됩니다. 만료된 토큰은 서명이 올바른 한
/// `Expired`로만 보고되고 `InvalidSignature`로 보고되지 않습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("토큰 서명이 유효하지 않습니다")]
    InvalidSignature,

    #[error("토큰이 만료되었습니다")]
    Expired,

    #[error("토큰 발급자(iss)가 일치하지 않습니다")]
    InvalidIssuer,
}

/// 프로바이더 호출 실패의 세부 원인
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderExchangeError {
    /// 프로바이더가 2xx 가 아닌 응답을 반환함. 응답 본문을 그대로 보존합니다.
    #[error("업스트림 응답 {status}: {body}")]
    Upstream { status: u16, body: String },

    /// 요청 타임아웃
    #[error("요청 시간 초과: {0}")]
    Timeout(String),

    /// 연결 실패 등 네트워크 계층 오류
    #[error("네트워크 오류: {0}")]
    Transport(String),

    /// 2xx 응답이지만 본문을 해석할 수 없음
    #[error("응답 형식 오류: {0}")]
    MalformedResponse(String),
}

impl ProviderExchangeError {
    /// `reqwest` 전송 오류를 타임아웃/네트워크 오류로 분류합니다.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderExchangeError::Timeout(err.to_string())
        } else if err.is_decode() {
            ProviderExchangeError::MalformedResponse(err.to_string())
        } else {
            ProviderExchangeError::Transport(err.to_string())
        }
    }
}

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 등록되지 않은 프로바이더 키 (400 Bad Request)
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// 프로바이더 토큰/사용자 정보 교환 실패 (4xx 패스스루 또는 502)
    #[error("{provider} exchange failed: {source}")]
    ProviderExchange {
        provider: AuthProvider,
        #[source]
        source: ProviderExchangeError,
    },

    /// 프로바이더 응답에 필수 식별 정보가 없음 (502 Bad Gateway)
    #[error("Identity extraction error: {0}")]
    IdentityExtraction(String),

    /// JWT 구조/인코딩 오류 (401 Unauthorized)
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// 서명, 만료, 발급자 검증 실패 (401 Unauthorized)
    #[error("Token validation error: {0}")]
    TokenValidation(#[from] TokenValidationError),

    /// 서명 키 로딩 실패 (500 Internal Server Error)
    #[error("Key load error: {0}")]
    KeyLoad(String),

    /// JWKS 에서 kid 에 해당하는 키를 찾지 못함 (502 Bad Gateway)
    #[error("JWKS lookup error: {0}")]
    JwksLookup(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 주체가 없는 보호 자원 접근 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 설정 누락 또는 잘못된 설정값 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 프로바이더 교환 에러 생성 헬퍼
    pub fn exchange(provider: AuthProvider, source: ProviderExchangeError) -> Self {
        AppError::ProviderExchange { provider, source }
    }

    /// 응답 본문의 `error` 필드에 들어가는 기계 판독용 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UnsupportedProvider(_) => "unsupported_provider",
            AppError::ProviderExchange { source, .. } => match source {
                ProviderExchangeError::Timeout(_) => "provider_timeout",
                _ => "provider_exchange_failed",
            },
            AppError::IdentityExtraction(_) => "identity_extraction_failed",
            AppError::MalformedToken(_) => "malformed_token",
            AppError::TokenValidation(TokenValidationError::InvalidSignature) => "invalid_signature",
            AppError::TokenValidation(TokenValidationError::Expired) => "token_expired",
            AppError::TokenValidation(TokenValidationError::InvalidIssuer) => "invalid_issuer",
            AppError::KeyLoad(_) => "key_load_failed",
            AppError::JwksLookup(_) => "jwks_lookup_failed",
            AppError::ValidationError(_) => "validation_error",
            AppError::AuthenticationError(_) => "authentication_required",
            AppError::ConflictError(_) => "conflict",
            AppError::DatabaseError(_) => "database_error",
            AppError::ConfigError(_) => "configuration_error",
            AppError::InternalError(_) => "internal_error",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnsupportedProvider(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::MalformedToken(_)
            | AppError::TokenValidation(_)
            | AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::ProviderExchange {
                source: ProviderExchangeError::Upstream { status, .. },
                ..
            } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            AppError::ProviderExchange { .. }
            | AppError::IdentityExtraction(_)
            | AppError::JwksLookup(_) => StatusCode::BAD_GATEWAY,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 내부 정보를 노출하지 않도록 메시지를 일반화하고,
    /// 상세 내용은 서버 로그에만 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let message = if status.is_server_error() && status != StatusCode::BAD_GATEWAY {
            log::error!("요청 처리 실패: {}", self);
            "서버 내부 오류가 발생했습니다".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": self.code(),
            "message": message
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

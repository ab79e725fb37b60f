//! 세션 토큰 발급/검증 서비스
//!
//! 이 서비스가 직접 발급하는 액세스/리프레시 JWT(HS256)를 다룹니다.
//! 프로바이더가 발급한 토큰(Apple ID 토큰 등)은 각 어댑터가 검증합니다.
//!
//! ## 서명 키 규칙
//!
//! HMAC 키 바이트 = `base64(STANDARD).encode(JWT_SECRET의 UTF-8 바이트)`.
//! 발급과 검증이 같은 [`TokenService`] 인스턴스의 키를 공유하므로 항상 일치합니다.
//!
//! ## 검증 실패 분류
//!
//! | 원인 | 에러 |
//! |------|------|
//! | 서명 불일치 | `TokenValidation(InvalidSignature)` |
//! | 만료 (서명은 유효) | `TokenValidation(Expired)` |
//! | 그 외 구조/인코딩/클레임 오류 | `MalformedToken` |
//!
//! 서명 검증이 만료 검사보다 먼저 수행되므로, 서명이 올바른 만료 토큰은
//! 항상 `Expired`로만 보고됩니다.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::domain::entities::members::Member;
use crate::domain::models::token::{SessionClaims, TokenKind, TokenPair};
use crate::errors::errors::{AppError, AppResult, TokenValidationError};

/// 세션 JWT 서비스
///
/// 키와 검증 규칙은 생성 시 한 번 만들어지고 이후 변경되지 않습니다.
/// 여러 워커가 `Arc<TokenService>`로 공유해도 잠금이 필요 없습니다.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
}

impl TokenService {
    /// JWT 설정으로 서비스를 생성합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_service = TokenService::new(&JwtConfig::from_env(&env)?);
    /// let pair = token_service.generate_token_pair(&member)?;
    /// ```
    pub fn new(config: &JwtConfig) -> Self {
        let key = STANDARD.encode(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(key.as_bytes()),
            decoding_key: DecodingKey::from_secret(key.as_bytes()),
            validation,
            access_ttl_seconds: config.access_expiry_seconds,
            refresh_ttl_seconds: config.refresh_expiry_seconds,
        }
    }

    /// 액세스 토큰을 생성합니다. subject 는 회원 이메일입니다.
    pub fn generate_access_token(&self, member: &Member) -> AppResult<String> {
        self.generate(member, TokenKind::Access)
    }

    /// 리프레시 토큰을 생성합니다. 구조는 액세스 토큰과 같고 TTL 만 깁니다.
    pub fn generate_refresh_token(&self, member: &Member) -> AppResult<String> {
        self.generate(member, TokenKind::Refresh)
    }

    /// 액세스 토큰과 리프레시 토큰을 함께 생성합니다.
    ///
    /// # Returns
    ///
    /// * `TokenPair` - `expires_in`은 액세스 토큰 TTL(초)
    pub fn generate_token_pair(&self, member: &Member) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.generate_access_token(member)?,
            refresh_token: self.generate_refresh_token(member)?,
            expires_in: self.access_ttl_seconds,
        })
    }

    fn generate(&self, member: &Member, kind: TokenKind) -> AppResult<String> {
        let ttl = match kind {
            TokenKind::Access => self.access_ttl_seconds,
            TokenKind::Refresh => self.refresh_ttl_seconds,
        };
        self.issue_at(member.subject(), &member.roles, Utc::now().timestamp(), ttl)
    }

    /// 지정한 발급 시각으로 토큰을 서명합니다.
    pub(crate) fn issue_at(&self, subject: &str, roles: &[String], issued_at: i64, ttl_seconds: i64) -> AppResult<String> {
        let expires_at = issued_at
            .checked_add(ttl_seconds)
            .ok_or_else(|| AppError::InternalError("토큰 만료 시각이 범위를 벗어났습니다".to_string()))?;

        let claims = SessionClaims {
            sub: subject.to_string(),
            iat: issued_at,
            exp: expires_at,
            jti: Uuid::new_v4().to_string(),
            roles: roles.to_vec(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 토큰 서명과 만료를 검증하고 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TokenValidation(InvalidSignature)` - 서명 불일치
    /// * `AppError::TokenValidation(Expired)` - 만료
    /// * `AppError::MalformedToken` - 그 외 파싱 실패
    pub fn verify_token(&self, token: &str) -> AppResult<SessionClaims> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenValidationError::InvalidSignature.into(),
                ErrorKind::ExpiredSignature => TokenValidationError::Expired.into(),
                _ => AppError::MalformedToken(e.to_string()),
            })
    }

    /// 토큰이 유효하면 `Ok(())`, 아니면 실패 종류를 담은 에러를 반환합니다.
    pub fn validate_token(&self, token: &str) -> AppResult<()> {
        self.verify_token(token).map(|_| ())
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.validate_token(token).is_ok()
    }

    pub fn get_subject(&self, token: &str) -> AppResult<String> {
        Ok(self.verify_token(token)?.sub)
    }

    /// 토큰의 역할 목록. 클레임이 없으면 빈 목록입니다.
    pub fn get_roles(&self, token: &str) -> AppResult<Vec<String>> {
        Ok(self.verify_token(token)?.roles)
    }

    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl_seconds
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
    ///
    /// `"Bearer "` 접두사가 없거나 토큰이 비어 있으면 `None`입니다.
    pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

//! 소셜 로그인 콜백 요청 DTO

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::errors::errors::{AppError, AppResult};

/// 콜백 요청 본문 (`{"code": "..."}`). 본문 자체가 없을 수도 있습니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuthCallbackBody {
    #[serde(default)]
    pub code: Option<String>,
}

/// 콜백 쿼리 파라미터 (`?code=...`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuthCallbackQuery {
    #[serde(default)]
    pub code: Option<String>,
}

/// 검증된 인가 코드
#[derive(Debug, Clone, Validate)]
pub struct OAuthCallbackRequest {
    #[validate(length(min = 1, max = 2048, message = "인가 코드는 1-2048자여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub code: String,
}

fn validate_not_blank(code: &str) -> Result<(), ValidationError> {
    if code.trim().is_empty() {
        return Err(ValidationError::new("blank_code").with_message("인가 코드가 비어 있습니다".into()));
    }
    Ok(())
}

impl OAuthCallbackRequest {
    /// 본문과 쿼리에서 인가 코드를 고릅니다. 본문에 값이 있으면 본문이 우선합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 두 곳 모두 코드가 없거나 비어 있는 경우
    pub fn resolve(body: Option<OAuthCallbackBody>, query: OAuthCallbackQuery) -> AppResult<Self> {
        let code = body
            .and_then(|b| b.code)
            .filter(|c| !c.is_empty())
            .or(query.code)
            .unwrap_or_default();

        let request = Self { code };
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        Ok(request)
    }
}

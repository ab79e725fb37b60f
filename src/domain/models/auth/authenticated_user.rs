//! 인증된 요청 주체
//!
//! [`AuthMiddleware`]가 Bearer 토큰을 검증한 뒤 request extensions 에
//! [`AuthenticatedUser`]를 넣어두면, 핸들러는 extractor 로 꺼내 씁니다.
//!
//! ```rust,ignore
//! #[get("/me")]
//! async fn me(user: AuthenticatedUser) -> HttpResponse {
//!     HttpResponse::Ok().json(user)
//! }
//!
//! #[get("/public")]
//! async fn public(user: OptionalUser) -> HttpResponse {
//!     match user.0 {
//!         Some(user) => HttpResponse::Ok().body(format!("hello {}", user.subject)),
//!         None => HttpResponse::Ok().body("hello guest"),
//!     }
//! }
//! ```
//!
//! [`AuthMiddleware`]: crate::middlewares::AuthMiddleware

use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::errors::errors::AppError;

/// 세션 토큰에서 복원한 요청 주체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 토큰 `sub` (회원 이메일)
    pub subject: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    /// 주체가 없으면 `AuthenticationError`(401)로 응답합니다.
    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            ))),
        }
    }
}

/// 인증이 선택적인 핸들러용 extractor. 항상 성공합니다.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(OptionalUser(req.extensions().get::<AuthenticatedUser>().cloned())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extract_missing_user_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let result = AuthenticatedUser::extract(&req).await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
        assert!(OptionalUser::extract(&req).await.unwrap().0.is_none());
    }

    #[actix_web::test]
    async fn test_extract_user_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser {
            subject: "member@example.com".to_string(),
            roles: vec!["user".to_string()],
        });

        let user = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(user.subject, "member@example.com");
        assert!(user.has_role("user"));
    }
}

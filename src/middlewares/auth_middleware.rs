//! JWT 인증 미들웨어
//!
//! 모든 요청의 `Authorization: Bearer` 헤더를 검증하고, 성공하면
//! [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! request extensions 에 저장합니다.
//!
//! # 모드
//!
//! | 모드 | 헤더 없음 | 유효한 토큰 | 잘못된 토큰 |
//! |------|-----------|-------------|-------------|
//! | `optional` | 익명으로 진행 | 주체 설정 | 익명으로 진행 (warn 로그) |
//! | `required` | 401 | 주체 설정 | 401 |
//!
//! 만료된 토큰을 계속 붙여 보내는 클라이언트도 공개 경로(로그인 콜백)는
//! 사용할 수 있습니다. 보호된 스코프에서는 `{"error", "message"}` 형식의
//! 401 응답이 되며, 처리되지 않은 에러로 새지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(AuthMiddleware::optional(token_service.clone()))
//!     .service(
//!         web::scope("/api/members")
//!             .wrap(AuthMiddleware::required(token_service.clone()))
//!             .service(handlers::members::get_current_member),
//!     )
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// 인증 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// 토큰이 있을 때만 검증
    Optional,
    /// 유효한 토큰 필수
    Required,
}

/// 인증 미들웨어 팩토리
pub struct AuthMiddleware {
    mode: AuthMode,
    token_service: Arc<TokenService>,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode, token_service: Arc<TokenService>) -> Self {
        Self { mode, token_service }
    }

    /// 앱 전체를 감싸는 게이트. 토큰이 없거나 유효하지 않으면 익명 요청으로 통과시킵니다.
    pub fn optional(token_service: Arc<TokenService>) -> Self {
        Self::new(AuthMode::Optional, token_service)
    }

    /// 보호된 스코프용. 바깥 게이트가 이미 설정한 주체를 재사용합니다.
    pub fn required(token_service: Arc<TokenService>) -> Self {
        Self::new(AuthMode::Required, token_service)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
            token_service: self.token_service.clone(),
        }))
    }
}

use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::{AppError, AppResult};
use crate::middlewares::auth_middleware::AuthMode;
use crate::services::auth::TokenService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
    pub token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;
        let token_service = self.token_service.clone();

        Box::pin(async move {
            let already_authenticated = req.extensions().contains::<AuthenticatedUser>();

            if !already_authenticated {
                match (mode, authenticate(&req, &token_service)) {
                    (_, Ok(Some(user))) => {
                        log::debug!("인증 성공: subject {}", user.subject);
                        req.extensions_mut().insert(user);
                    }
                    // Optional 모드: 토큰 없음 (익명 진행)
                    (AuthMode::Optional, Ok(None)) => {}
                    // Optional 모드: 잘못된 토큰도 익명으로 진행 (재로그인 허용)
                    (AuthMode::Optional, Err(err)) => {
                        log::warn!("토큰 검증 실패, 익명 요청으로 진행: {}", err);
                    }
                    (AuthMode::Required, Ok(None)) => {
                        return Ok(reject(
                            req,
                            AppError::AuthenticationError("유효한 인증 토큰이 필요합니다".to_string()),
                        ));
                    }
                    (AuthMode::Required, Err(err)) => {
                        log::warn!("인증 실패: {}", err);
                        return Ok(reject(req, err));
                    }
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Bearer 토큰을 검증합니다. Bearer 헤더가 없으면 `Ok(None)`입니다.
fn authenticate(req: &ServiceRequest, token_service: &TokenService) -> AppResult<Option<AuthenticatedUser>> {
    let Some(token) = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(TokenService::extract_bearer_token)
    else {
        return Ok(None);
    };

    let claims = token_service.verify_token(token)?;

    Ok(Some(AuthenticatedUser {
        subject: claims.sub,
        roles: claims.roles,
    }))
}

fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    let response = err.error_response();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

//! Authentication HTTP Handlers
//!
//! 소셜 로그인 콜백 엔드포인트입니다. 프로바이더에서 받은 인가 코드를
//! 세션 토큰 쌍으로 교환합니다.
//!
//! # Endpoint
//!
//! - `POST /api/auth/{provider}/callback` - `{"code": "..."}` 본문 또는 `?code=...`
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/auth/kakao/callback \
//!   -H "Content-Type: application/json" \
//!   -d '{"code":"authorization-code"}'
//! ```
use actix_web::{post, web, HttpResponse};

use crate::domain::dto::{LoginResponse, OAuthCallbackBody, OAuthCallbackQuery, OAuthCallbackRequest};
use crate::errors::errors::AppError;
use crate::services::auth::AuthService;

/// 소셜 로그인 콜백 처리 핸들러
///
/// 인가 코드는 본문이 쿼리보다 우선합니다. 최초 로그인이면 회원이 자동으로 가입됩니다.
///
/// # Errors
///
/// * 400 - 알 수 없는 프로바이더, 인가 코드 누락
/// * 401 - 프로바이더 ID 토큰 검증 실패
/// * 4xx/502 - 프로바이더 호출 실패 (프로바이더 응답 상태 전달)
#[post("/{provider}/callback")]
pub async fn oauth_callback(
    provider: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
    body: Option<web::Json<OAuthCallbackBody>>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    let request = OAuthCallbackRequest::resolve(body.map(web::Json::into_inner), query.into_inner())?;

    log::info!("소셜 로그인 콜백 수신: provider={}", provider);

    let result = auth_service.handle_login(&provider, &request.code).await?;

    Ok(HttpResponse::Ok().json(LoginResponse::new(&result.member, result.tokens)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::config::{AuthProvider, JwtConfig};
    use crate::core::context::AppContext;
    use crate::core::registry::ProviderRegistry;
    use crate::domain::models::oauth::ProviderIdentity;
    use crate::errors::errors::AppResult;
    use crate::repositories::members::InMemoryMemberRepository;
    use crate::services::auth::{OAuthProvider, TokenService};

    struct StubKakao;

    #[async_trait]
    impl OAuthProvider for StubKakao {
        fn provider(&self) -> AuthProvider {
            AuthProvider::Kakao
        }

        async fn exchange_authorization_code(&self, code: &str) -> AppResult<ProviderIdentity> {
            Ok(ProviderIdentity::new(code, "test@kakao.com", AuthProvider::Kakao))
        }
    }

    fn context() -> AppContext {
        let token_service = Arc::new(TokenService::new(&JwtConfig {
            secret: "handler-secret".to_string(),
            access_expiry_seconds: 3600,
            refresh_expiry_seconds: 1_209_600,
        }));
        AppContext::from_parts(
            ProviderRegistry::builder().register(Arc::new(StubKakao)).build(),
            Arc::new(InMemoryMemberRepository::new()),
            token_service,
        )
    }

    macro_rules! app {
        ($context:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::from($context.auth_service.clone()))
                    .service(web::scope("/api/auth").service(oauth_callback)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_callback_with_body_code() {
        let context = context();
        let app = app!(context);

        let req = test::TestRequest::post()
            .uri("/api/auth/kakao/callback")
            .set_json(serde_json::json!({ "code": "body-code" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["member"]["email"], "test@kakao.com");
        assert_eq!(body["member"]["provider"], "KAKAO");
        assert_eq!(body["token_type"], "Bearer");
        assert_eq!(body["expires_in"], 3600);

        let access_token = body["access_token"].as_str().unwrap();
        assert_eq!(context.token_service.get_subject(access_token).unwrap(), "test@kakao.com");
    }

    #[actix_web::test]
    async fn test_callback_with_query_code() {
        let context = context();
        let app = app!(context);

        let req = test::TestRequest::post()
            .uri("/api/auth/KAKAO/callback?code=query-code")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_callback_without_code_is_bad_request() {
        let context = context();
        let app = app!(context);

        let req = test::TestRequest::post().uri("/api/auth/kakao/callback").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation_error");
    }

    #[actix_web::test]
    async fn test_callback_unknown_provider_is_bad_request() {
        let context = context();
        let app = app!(context);

        for provider in ["naver", "apple"] {
            let req = test::TestRequest::post()
                .uri(&format!("/api/auth/{}/callback?code=abc", provider))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "unsupported_provider");
        }
    }
}

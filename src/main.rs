use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use social_auth_backend::config::ServerConfig;
use social_auth_backend::core::{AppConfig, AppContext};
use social_auth_backend::middlewares::AuthMiddleware;
use social_auth_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 1. 환경 파일 로드
    load_env_file();

    // 2. 로깅 초기화
    init_logging();

    info!("🚀 소셜 로그인 인증 서비스 시작중...");

    // 3. 설정 로드 및 서비스 조립
    let server_config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ 서버 설정 로드 실패: {}", e);
            std::process::exit(1);
        }
    };

    let context = match AppConfig::from_env() {
        Ok(config) => match AppContext::build(config).await {
            Ok(context) => context,
            Err(e) => {
                error!("❌ 서비스 초기화 실패: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("❌ 설정 로드 실패: {}", e);
            std::process::exit(1);
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(server_config, context).await
}

async fn start_http_server(server_config: ServerConfig, context: AppContext) -> std::io::Result<()> {
    let bind_address = server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(server_config.rate_limit_per_second)
        .burst_size(server_config.rate_limit_burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        server_config.rate_limit_per_second,
        server_config.rate_limit_burst_size
    );

    let allowed_origins = server_config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        let token_service = context.token_service.clone();

        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(AuthMiddleware::optional(token_service.clone()))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(web::Data::from(context.auth_service.clone()))
            .configure(|cfg| configure_all_routes(cfg, token_service))
    })
        .bind(&bind_address)?
        .workers(server_config.workers)
        .run()
        .await
}

/// PROFILE 환경 변수에 따라 `.env.{profile}` 파일을 로드합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

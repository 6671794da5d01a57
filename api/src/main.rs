use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use one_api::app::create_app;
use one_api::config::ApiConfig;
use one_api::state::AppState;
use one_core::services::token::TokenService;
use one_infra::database::mysql::{MySqlBidRepository, MySqlJobRepository};
use one_infra::database::{create_pool, DatabaseConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting OneSphere API server");

    let config = ApiConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    // A dead store at startup is fatal; refusing to start beats serving 503s
    let pool = create_pool(&db_config).await?;
    info!("Connected to database");

    let job_repository = Arc::new(MySqlJobRepository::new(pool.clone()));
    let bid_repository = Arc::new(MySqlBidRepository::new(pool));
    let token_service = Arc::new(TokenService::new(config.token_service_config()));

    let state = web::Data::new(AppState::new(
        token_service,
        job_repository,
        bid_repository,
        config.environment,
    ));

    let bind_address = config.bind_address();
    info!("Server listening on {bind_address}");

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}

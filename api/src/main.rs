use account_api::{config, create_app, AppState};
use account_core::{InMemoryUserRepository, SigningKeys, TokenService, TokenServiceConfig, UserService};
use account_infra::{BcryptPasswordHasher, LocalImageRepository, RedisClient, RedisRevocationStore};
use actix_web::{web, HttpServer};
use anyhow::Context;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load();
    config::init_tracing(&config.logging);

    tracing::info!(environment = %config.environment, "Starting account API server");

    config::ensure_refresh_secret(&config)?;

    let keys = SigningKeys::from_config(&config.jwt).context("failed to load token signing keys")?;

    let redis = RedisClient::new(config.cache.clone())
        .await
        .context("failed to connect to Redis")?;

    let token_service = TokenService::new(
        RedisRevocationStore::new(redis),
        keys,
        TokenServiceConfig::from(&config.jwt),
    );

    // Account rows live in process memory; only refresh token ids are persisted.
    let user_service = UserService::new(
        InMemoryUserRepository::new(),
        LocalImageRepository::from_config(&config.storage),
        BcryptPasswordHasher::default(),
    );

    let state = web::Data::new(AppState::new(token_service, user_service, &config.server));
    let base_url = config.server.base_url.clone();
    let bind_address = config.server.bind_address();

    tracing::info!(address = %bind_address, base_url = %base_url, "Server binding");

    let mut server = HttpServer::new(move || create_app(state.clone(), &base_url));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")?;

    tracing::info!("Server stopped");
    Ok(())
}

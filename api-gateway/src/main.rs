use actix_web::{web, App, HttpServer};
use api_gateway::middleware::AuthMiddleware;
use api_gateway::{rest_api, Config, ServiceClients};
use content_service::{PgPostStore, PostService};
use crypto_core::TokenKeys;
use identity_service::{IdentityService, PgUserStore};
use promo_service::{PgPromoStore, PromoService};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

async fn connect(url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await?;
    Ok(pool)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // One pool per backend service; created once, passed by handle, each
    // request checks a connection out for its own duration only.
    let identity_pool = connect(&config.identity_db.url, config.identity_db.max_connections).await?;
    let content_pool = connect(&config.content_db.url, config.content_db.max_connections).await?;
    let promo_pool = connect(&config.promo_db.url, config.promo_db.max_connections).await?;

    let keys = TokenKeys::from_secret(&config.auth.jwt_secret, config.auth.token_ttl_secs);

    let clients = ServiceClients::new(
        Arc::new(IdentityService::new(
            Arc::new(PgUserStore::new(identity_pool)),
            keys.clone(),
        )),
        Arc::new(PostService::new(Arc::new(PgPostStore::new(content_pool)))),
        Arc::new(PromoService::new(Arc::new(PgPromoStore::new(promo_pool)))),
    );

    let bind = (config.app.host.clone(), config.app.port);
    info!(host = %config.app.host, port = config.app.port, "starting api-gateway");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(clients.clone()))
            .configure(rest_api::public_routes)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::new(keys.clone()))
                    .configure(rest_api::protected_routes),
            )
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}

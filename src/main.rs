//! Service binary: wires configuration, adapters, and the axum server.

use anyhow::Context;
use ship_quote::api::rest::{create_router, AppState};
use ship_quote::config::AppConfig;
use ship_quote::domain::value_objects::ShopId;
use ship_quote::infrastructure::logistics::ghn::GhnClient;
use ship_quote::infrastructure::rates::open_er::OpenErApiSource;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ship_quote=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;

    let logistics = GhnClient::new(
        config.logistics.base_url.clone(),
        &config.logistics.token,
        ShopId::new(config.logistics.shop_id),
        config.logistics.timeout_ms,
    )
    .context("failed to build logistics client")?;

    let rates = OpenErApiSource::new(
        config.rates.endpoint.clone(),
        config.rates.target_currency.clone(),
        config.rates.timeout_ms,
    )
    .context("failed to build rate source client")?;

    let state = AppState::new(Arc::new(logistics), Arc::new(rates));
    let router = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router)
        .await
        .context("server error")?;

    Ok(())
}

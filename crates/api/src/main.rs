use anyhow::Context;

use hotelier_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hotelier_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    match &config.auth {
        None => tracing::warn!("HOTEL_ADMIN_PASSWORD not set; admin routes are open to everyone"),
        Some(auth) if auth.ephemeral_secret => {
            tracing::warn!("HOTEL_JWT_SECRET not set; using a random secret, tokens will not survive a restart")
        }
        Some(_) => {}
    }

    let app = hotelier_api::app::build_app(&config)
        .await
        .context("failed to initialise services")?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

use mailposture::backend::{DynBackend, HttpBackend};
use mailposture::config::Config;
use mailposture::web;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mailposture=info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_init();

    let config = Arc::new(Config::try_from_env()?);
    let backend: DynBackend = Arc::new(HttpBackend::new(config.clone())?);

    tracing::info!("listening on {}", &config.bind_addr);
    let server_handle = tokio::spawn(web::new(config, backend));

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("interrupt received, shutting down");
        }
        server_res = server_handle => {
            server_res??;
        }
    }

    tracing::info!("goodbye");
    Ok(())
}

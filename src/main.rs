use anyhow::Result;
use kiji_core::application::services::{ApplicationServices, ArticlePorts};
use kiji_core::config::AppConfig;
use kiji_core::infrastructure::{
    database,
    repositories::{
        PostgresAdminRepository, PostgresArticleReadRepository, PostgresArticleWriteRepository,
        PostgresCategoryRepository, PostgresCommentRepository,
    },
    time::SystemClock,
};
use kiji_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let ports = ArticlePorts {
        article_write_repo: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        article_read_repo: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        admin_repo: Arc::new(PostgresAdminRepository::new(pool.clone())),
        category_repo: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        comment_repo: Arc::new(PostgresCommentRepository::new(pool)),
        clock: Arc::new(SystemClock),
    };

    tracing::info!(listing_policy = ?config.listing_policy(), "wiring article services");
    let services = Arc::new(ApplicationServices::new(ports, config.listing_policy()));
    let state = HttpState { services };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}

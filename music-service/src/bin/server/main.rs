use std::path::Path;
use std::sync::Arc;

use auth::Authenticator;
use music_service::config::Config;
use music_service::domain::author::service::AuthorService;
use music_service::domain::playlist::service::PlaylistService;
use music_service::domain::track::service::TrackService;
use music_service::domain::user::service::UserService;
use music_service::inbound::http::router::create_router;
use music_service::inbound::http::router::AppState;
use music_service::outbound::repositories::PostgresAuthorRepository;
use music_service::outbound::repositories::PostgresPlaylistRepository;
use music_service::outbound::repositories::PostgresTrackRepository;
use music_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "music_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "music-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        static_dir = %config.server.static_dir,
        max_connections = config.database.max_connections,
        token_ttl_minutes = config.jwt.expiration_minutes,
        leeway_seconds = config.jwt.leeway_seconds,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(
        Authenticator::new(
            config.jwt.secret.as_bytes(),
            chrono::Duration::minutes(config.jwt.expiration_minutes),
        )
        .with_leeway(config.jwt.leeway_seconds),
    );

    let state = AppState {
        user_service: Arc::new(UserService::new(
            Arc::new(PostgresUserRepository::new(pg_pool.clone())),
            authenticator,
        )),
        author_service: Arc::new(AuthorService::new(Arc::new(
            PostgresAuthorRepository::new(pg_pool.clone()),
        ))),
        track_service: Arc::new(TrackService::new(Arc::new(PostgresTrackRepository::new(
            pg_pool.clone(),
        )))),
        playlist_service: Arc::new(PlaylistService::new(Arc::new(
            PostgresPlaylistRepository::new(pg_pool),
        ))),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(state, Path::new(&config.server.static_dir));

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}

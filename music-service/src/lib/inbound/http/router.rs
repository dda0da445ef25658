use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth;
use super::handlers::authors;
use super::handlers::playlists;
use super::handlers::tracks;
use super::handlers::users;
use super::middleware::authenticate as auth_middleware;
use crate::domain::author::ports::AuthorServicePort;
use crate::domain::playlist::ports::PlaylistServicePort;
use crate::domain::track::ports::TrackServicePort;
use crate::domain::user::ports::UserServicePort;

/// Services shared by every handler; adapters are chosen by the caller.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub author_service: Arc<dyn AuthorServicePort>,
    pub track_service: Arc<dyn TrackServicePort>,
    pub playlist_service: Arc<dyn PlaylistServicePort>,
}

/// Build the HTTP application. Audio files named by `Track::file_name` are
/// served read-only from `static_dir` under `/static`.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/authors", get(authors::list_authors))
        .route("/api/authors/:author_id", get(authors::get_author))
        .route(
            "/api/authors/:author_id/tracks",
            get(authors::list_author_tracks),
        )
        .route("/api/tracks", get(tracks::list_tracks))
        .route("/api/tracks/:track_id", get(tracks::get_track))
        .route("/api/playlists", get(playlists::list_playlists))
        .route("/api/playlists/:playlist_id", get(playlists::get_playlist))
        .route(
            "/api/playlists/:playlist_id/tracks",
            get(playlists::list_tracks),
        )
        .route(
            "/api/users/:user_id/playlists",
            get(users::list_user_playlists),
        )
        .nest_service("/static", ServeDir::new(static_dir));

    let protected_routes = Router::new()
        .route("/api/authors", post(authors::create_author))
        .route("/api/authors/:author_id", patch(authors::update_author))
        .route("/api/authors/:author_id", delete(authors::delete_author))
        .route("/api/tracks", post(tracks::create_track))
        .route("/api/tracks/:track_id", patch(tracks::update_track))
        .route("/api/tracks/:track_id", delete(tracks::delete_track))
        .route("/api/playlists", post(playlists::create_playlist))
        .route(
            "/api/playlists/:playlist_id",
            patch(playlists::update_playlist),
        )
        .route(
            "/api/playlists/:playlist_id",
            delete(playlists::delete_playlist),
        )
        .route(
            "/api/playlists/:playlist_id/tracks",
            post(playlists::add_track),
        )
        .route(
            "/api/playlists/:playlist_id/tracks/:track_id",
            delete(playlists::remove_track),
        )
        .route("/api/users", get(users::list_users))
        .route("/api/users/me", get(users::get_me))
        .route("/api/users/:user_id", get(users::get_user))
        .route("/api/users/:user_id", patch(users::update_user))
        .route("/api/users/:user_id", delete(users::delete_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            // Headers stay out of the span: they carry bearer tokens
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

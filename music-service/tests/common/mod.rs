#![allow(dead_code)]

use std::sync::Arc;

use auth::Authenticator;
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
use serde_json::json;
use serde_json::Value;
use tempfile::TempDir;

mod memory;
mod postgres;

pub use memory::InMemoryStore;
pub use postgres::TestDb;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

fn test_authenticator() -> Arc<Authenticator> {
    Arc::new(Authenticator::new(
        TEST_SECRET,
        chrono::Duration::minutes(30),
    ))
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
    /// Served under `/static`; removed when the app is dropped
    pub static_dir: TempDir,
    store: Option<Arc<InMemoryStore>>,
    db: Option<TestDb>,
}

impl TestApp {
    /// Spawn the application over in-memory repositories
    pub async fn spawn() -> Self {
        let store = Arc::new(InMemoryStore::default());
        let authenticator = test_authenticator();

        let state = AppState {
            user_service: Arc::new(UserService::new(
                Arc::clone(&store),
                Arc::clone(&authenticator),
            )),
            author_service: Arc::new(AuthorService::new(Arc::clone(&store))),
            track_service: Arc::new(TrackService::new(Arc::clone(&store))),
            playlist_service: Arc::new(PlaylistService::new(Arc::clone(&store))),
        };

        Self::launch(state, authenticator, Some(store), None).await
    }

    /// Spawn the application over the Postgres repositories and a fresh
    /// database, or None when no database server is configured.
    pub async fn spawn_with_postgres() -> Option<Self> {
        let db = TestDb::create().await?;
        let authenticator = test_authenticator();

        let state = AppState {
            user_service: Arc::new(UserService::new(
                Arc::new(PostgresUserRepository::new(db.pool.clone())),
                Arc::clone(&authenticator),
            )),
            author_service: Arc::new(AuthorService::new(Arc::new(
                PostgresAuthorRepository::new(db.pool.clone()),
            ))),
            track_service: Arc::new(TrackService::new(Arc::new(PostgresTrackRepository::new(
                db.pool.clone(),
            )))),
            playlist_service: Arc::new(PlaylistService::new(Arc::new(
                PostgresPlaylistRepository::new(db.pool.clone()),
            ))),
        };

        Some(Self::launch(state, authenticator, None, Some(db)).await)
    }

    async fn launch(
        state: AppState,
        authenticator: Arc<Authenticator>,
        store: Option<Arc<InMemoryStore>>,
        db: Option<TestDb>,
    ) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let static_dir = TempDir::new().expect("Failed to create static directory");
        let router = create_router(state, static_dir.path());

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            authenticator,
            static_dir,
            store,
            db,
        }
    }

    /// In-memory store backing an app from `spawn`
    pub fn store(&self) -> &InMemoryStore {
        self.store
            .as_deref()
            .expect("App was not spawned over the in-memory store")
    }

    /// Write a file into the served static directory
    pub fn write_static_file(&self, file_name: &str, contents: &[u8]) {
        std::fs::write(self.static_dir.path().join(file_name), contents)
            .expect("Failed to write static file");
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register an identity and return its id
    pub async fn register(&self, login: &str, password: &str) -> i64 {
        let response = self
            .post("/api/auth/register")
            .json(&json!({ "login": login, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_i64().expect("Missing user id")
    }

    /// Log in and return the bearer token
    pub async fn login(&self, login: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&json!({ "login": login, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"]["access_token"]
            .as_str()
            .expect("Missing access token")
            .to_string()
    }

    /// Register, log in, and return (user id, token)
    pub async fn register_and_login(&self, login: &str, password: &str) -> (i64, String) {
        let id = self.register(login, password).await;
        let token = self.login(login, password).await;
        (id, token)
    }

    /// Create an author and return its id
    pub async fn create_author(&self, token: &str, nickname: &str) -> i64 {
        let response = self
            .post_authenticated("/api/authors", token)
            .json(&json!({ "nickname": nickname }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_i64().expect("Missing author id")
    }

    /// Create a track and return its id
    pub async fn create_track(&self, token: &str, author_id: i64, name: &str) -> i64 {
        let response = self
            .post_authenticated("/api/tracks", token)
            .json(&json!({
                "name": name,
                "duration": 215,
                "author_id": author_id,
                "file_name": format!("{}.mp3", name.to_lowercase().replace(' ', "_")),
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_i64().expect("Missing track id")
    }
}

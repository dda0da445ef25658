pub mod author;
pub mod playlist;
pub mod track;
pub mod user;

pub use author::PostgresAuthorRepository;
pub use playlist::PostgresPlaylistRepository;
pub use track::PostgresTrackRepository;
pub use user::PostgresUserRepository;

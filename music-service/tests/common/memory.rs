use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use music_service::author::errors::AuthorError;
use music_service::author::models::Author;
use music_service::author::models::AuthorId;
use music_service::author::models::Nickname;
use music_service::author::ports::AuthorRepository;
use music_service::playlist::errors::PlaylistError;
use music_service::playlist::models::CreatePlaylistCommand;
use music_service::playlist::models::Playlist;
use music_service::playlist::models::PlaylistId;
use music_service::playlist::models::PlaylistTrack;
use music_service::playlist::ports::PlaylistRepository;
use music_service::track::errors::TrackError;
use music_service::track::models::CreateTrackCommand;
use music_service::track::models::Track;
use music_service::track::models::TrackId;
use music_service::track::models::TrackName;
use music_service::track::ports::TrackRepository;
use music_service::user::errors::UserError;
use music_service::user::models::Login;
use music_service::user::models::NewUser;
use music_service::user::models::User;
use music_service::user::models::UserId;
use music_service::user::ports::UserRepository;

#[derive(Default)]
struct Tables {
    next_id: i64,
    users: BTreeMap<i64, User>,
    authors: BTreeMap<i64, Author>,
    tracks: BTreeMap<i64, Track>,
    playlists: BTreeMap<i64, Playlist>,
    playlist_tracks: BTreeMap<i64, PlaylistTrack>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn drop_playlist_links(&mut self, predicate: impl Fn(&PlaylistTrack) -> bool) {
        self.playlist_tracks.retain(|_, link| !predicate(link));
    }

    fn drop_playlists_of(&mut self, user_id: UserId) {
        let removed: Vec<PlaylistId> = self
            .playlists
            .values()
            .filter(|p| p.user_id == user_id)
            .map(|p| p.id)
            .collect();
        self.playlists.retain(|_, p| p.user_id != user_id);
        self.drop_playlist_links(|link| removed.contains(&link.playlist_id));
    }

    fn drop_tracks_of(&mut self, author_id: AuthorId) {
        let removed: Vec<TrackId> = self
            .tracks
            .values()
            .filter(|t| t.author_id == author_id)
            .map(|t| t.id)
            .collect();
        self.tracks.retain(|_, t| t.author_id != author_id);
        self.drop_playlist_links(|link| removed.contains(&link.track_id));
    }
}

/// In-memory stand-in for Postgres: enforces the same unique constraints,
/// foreign keys, and cascading deletes as the migrations.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    fn tables(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().expect("store lock poisoned")
    }

    pub fn user_count(&self) -> usize {
        self.tables().users.len()
    }

    pub fn stored_password_hash(&self, login: &str) -> Option<String> {
        self.tables()
            .users
            .values()
            .find(|u| u.login.as_str() == login)
            .map(|u| u.password_hash.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut tables = self.tables();
        if tables.users.values().any(|u| u.login == user.login) {
            return Err(UserError::LoginAlreadyExists(user.login.to_string()));
        }
        let id = tables.next_id();
        let stored = User {
            id: UserId(id),
            login: user.login,
            password_hash: user.password_hash,
        };
        tables.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.tables().users.get(&id.0).cloned())
    }

    async fn find_by_login(&self, login: &Login) -> Result<Option<User>, UserError> {
        Ok(self
            .tables()
            .users
            .values()
            .find(|u| &u.login == login)
            .cloned())
    }

    async fn list(&self, limit: i64) -> Result<Vec<User>, UserError> {
        Ok(self
            .tables()
            .users
            .values()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut tables = self.tables();
        if tables
            .users
            .values()
            .any(|u| u.login == user.login && u.id != user.id)
        {
            return Err(UserError::LoginAlreadyExists(user.login.to_string()));
        }
        match tables.users.get_mut(&user.id.0) {
            Some(stored) => {
                *stored = user.clone();
                Ok(user)
            }
            None => Err(UserError::NotFound(user.id)),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<User, UserError> {
        let mut tables = self.tables();
        let user = tables.users.remove(&id.0).ok_or(UserError::NotFound(*id))?;
        tables.drop_playlists_of(*id);
        Ok(user)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryStore {
    async fn create(&self, nickname: Nickname) -> Result<Author, AuthorError> {
        let mut tables = self.tables();
        if tables.authors.values().any(|a| a.nickname == nickname) {
            return Err(AuthorError::NicknameAlreadyExists(nickname.to_string()));
        }
        let id = tables.next_id();
        let author = Author {
            id: AuthorId(id),
            nickname,
        };
        tables.authors.insert(id, author.clone());
        Ok(author)
    }

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, AuthorError> {
        Ok(self.tables().authors.get(&id.0).cloned())
    }

    async fn find_by_nickname(&self, nickname: &Nickname) -> Result<Option<Author>, AuthorError> {
        Ok(self
            .tables()
            .authors
            .values()
            .find(|a| &a.nickname == nickname)
            .cloned())
    }

    async fn list(&self, limit: i64) -> Result<Vec<Author>, AuthorError> {
        Ok(self
            .tables()
            .authors
            .values()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, author: Author) -> Result<Author, AuthorError> {
        let mut tables = self.tables();
        if tables
            .authors
            .values()
            .any(|a| a.nickname == author.nickname && a.id != author.id)
        {
            return Err(AuthorError::NicknameAlreadyExists(author.nickname.to_string()));
        }
        match tables.authors.get_mut(&author.id.0) {
            Some(stored) => {
                *stored = author.clone();
                Ok(author)
            }
            None => Err(AuthorError::NotFound(author.id)),
        }
    }

    async fn delete(&self, id: &AuthorId) -> Result<Author, AuthorError> {
        let mut tables = self.tables();
        let author = tables
            .authors
            .remove(&id.0)
            .ok_or(AuthorError::NotFound(*id))?;
        tables.drop_tracks_of(*id);
        Ok(author)
    }
}

#[async_trait]
impl TrackRepository for InMemoryStore {
    async fn create(&self, command: CreateTrackCommand) -> Result<Track, TrackError> {
        let mut tables = self.tables();
        if tables.tracks.values().any(|t| t.name == command.name) {
            return Err(TrackError::NameAlreadyExists(command.name.to_string()));
        }
        if !tables.authors.contains_key(&command.author_id.0) {
            return Err(TrackError::AuthorNotFound(command.author_id));
        }
        let id = tables.next_id();
        let track = Track {
            id: TrackId(id),
            name: command.name,
            duration: command.duration,
            author_id: command.author_id,
            file_name: command.file_name,
        };
        tables.tracks.insert(id, track.clone());
        Ok(track)
    }

    async fn find_by_id(&self, id: &TrackId) -> Result<Option<Track>, TrackError> {
        Ok(self.tables().tracks.get(&id.0).cloned())
    }

    async fn find_by_name(&self, name: &TrackName) -> Result<Option<Track>, TrackError> {
        Ok(self
            .tables()
            .tracks
            .values()
            .find(|t| &t.name == name)
            .cloned())
    }

    async fn list(&self, limit: i64) -> Result<Vec<Track>, TrackError> {
        Ok(self
            .tables()
            .tracks
            .values()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn list_by_author(&self, author_id: &AuthorId) -> Result<Vec<Track>, TrackError> {
        Ok(self
            .tables()
            .tracks
            .values()
            .filter(|t| &t.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn update(&self, track: Track) -> Result<Track, TrackError> {
        let mut tables = self.tables();
        if tables
            .tracks
            .values()
            .any(|t| t.name == track.name && t.id != track.id)
        {
            return Err(TrackError::NameAlreadyExists(track.name.to_string()));
        }
        if !tables.authors.contains_key(&track.author_id.0) {
            return Err(TrackError::AuthorNotFound(track.author_id));
        }
        match tables.tracks.get_mut(&track.id.0) {
            Some(stored) => {
                *stored = track.clone();
                Ok(track)
            }
            None => Err(TrackError::NotFound(track.id)),
        }
    }

    async fn delete(&self, id: &TrackId) -> Result<Track, TrackError> {
        let mut tables = self.tables();
        let track = tables.tracks.remove(&id.0).ok_or(TrackError::NotFound(*id))?;
        tables.drop_playlist_links(|link| link.track_id == *id);
        Ok(track)
    }
}

#[async_trait]
impl PlaylistRepository for InMemoryStore {
    async fn create(&self, command: CreatePlaylistCommand) -> Result<Playlist, PlaylistError> {
        let mut tables = self.tables();
        if !tables.users.contains_key(&command.user_id.0) {
            return Err(PlaylistError::OwnerNotFound(command.user_id));
        }
        let id = tables.next_id();
        let playlist = Playlist {
            id: PlaylistId(id),
            name: command.name,
            user_id: command.user_id,
        };
        tables.playlists.insert(id, playlist.clone());
        Ok(playlist)
    }

    async fn find_by_id(&self, id: &PlaylistId) -> Result<Option<Playlist>, PlaylistError> {
        Ok(self.tables().playlists.get(&id.0).cloned())
    }

    async fn list(&self, limit: i64) -> Result<Vec<Playlist>, PlaylistError> {
        Ok(self
            .tables()
            .playlists
            .values()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        limit: i64,
    ) -> Result<Vec<Playlist>, PlaylistError> {
        Ok(self
            .tables()
            .playlists
            .values()
            .filter(|p| &p.user_id == user_id)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, playlist: Playlist) -> Result<Playlist, PlaylistError> {
        let mut tables = self.tables();
        if !tables.users.contains_key(&playlist.user_id.0) {
            return Err(PlaylistError::OwnerNotFound(playlist.user_id));
        }
        match tables.playlists.get_mut(&playlist.id.0) {
            Some(stored) => {
                *stored = playlist.clone();
                Ok(playlist)
            }
            None => Err(PlaylistError::NotFound(playlist.id)),
        }
    }

    async fn delete(&self, id: &PlaylistId) -> Result<Playlist, PlaylistError> {
        let mut tables = self.tables();
        let playlist = tables
            .playlists
            .remove(&id.0)
            .ok_or(PlaylistError::NotFound(*id))?;
        tables.drop_playlist_links(|link| link.playlist_id == *id);
        Ok(playlist)
    }

    async fn add_track(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<PlaylistTrack, PlaylistError> {
        let mut tables = self.tables();
        if !tables.playlists.contains_key(&playlist_id.0) {
            return Err(PlaylistError::NotFound(*playlist_id));
        }
        if !tables.tracks.contains_key(&track_id.0) {
            return Err(PlaylistError::TrackNotFound(*track_id));
        }
        if tables
            .playlist_tracks
            .values()
            .any(|l| &l.playlist_id == playlist_id && &l.track_id == track_id)
        {
            return Err(PlaylistError::TrackAlreadyInPlaylist {
                playlist_id: *playlist_id,
                track_id: *track_id,
            });
        }
        let id = tables.next_id();
        let link = PlaylistTrack {
            id,
            playlist_id: *playlist_id,
            track_id: *track_id,
        };
        tables.playlist_tracks.insert(id, link);
        Ok(link)
    }

    async fn list_tracks(
        &self,
        playlist_id: &PlaylistId,
    ) -> Result<Vec<PlaylistTrack>, PlaylistError> {
        Ok(self
            .tables()
            .playlist_tracks
            .values()
            .filter(|l| &l.playlist_id == playlist_id)
            .copied()
            .collect())
    }

    async fn remove_track(
        &self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<Option<PlaylistTrack>, PlaylistError> {
        let mut tables = self.tables();
        let found = tables
            .playlist_tracks
            .values()
            .find(|l| &l.playlist_id == playlist_id && &l.track_id == track_id)
            .copied();
        if let Some(link) = found {
            tables.playlist_tracks.remove(&link.id);
        }
        Ok(found)
    }
}

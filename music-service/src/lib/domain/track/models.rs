use std::fmt;

use crate::author::models::AuthorId;
use crate::track::errors::FileNameError;
use crate::track::errors::TrackDurationError;
use crate::track::errors::TrackNameError;

/// A track in the catalogue.
///
/// `file_name` names the audio file inside the static media directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,
    pub name: TrackName,
    pub duration: TrackDuration,
    pub author_id: AuthorId,
    pub file_name: FileName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub i64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Track title, unique across the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackName(String);

impl TrackName {
    const MAX_LENGTH: usize = 200;

    pub fn new(name: String) -> Result<Self, TrackNameError> {
        let name = name.trim();
        let length = name.chars().count();
        if length == 0 {
            return Err(TrackNameError::Empty);
        }
        if length > Self::MAX_LENGTH {
            return Err(TrackNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Track length in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackDuration(i32);

impl TrackDuration {
    pub fn new(seconds: i32) -> Result<Self, TrackDurationError> {
        if seconds < 0 {
            return Err(TrackDurationError::Negative(seconds));
        }
        Ok(Self(seconds))
    }

    pub fn seconds(&self) -> i32 {
        self.0
    }
}

/// Bare file name of the audio file; never a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileName(String);

impl FileName {
    const MAX_LENGTH: usize = 255;

    pub fn new(file_name: String) -> Result<Self, FileNameError> {
        let length = file_name.chars().count();
        if length == 0 {
            return Err(FileNameError::Empty);
        }
        if length > Self::MAX_LENGTH {
            return Err(FileNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        if file_name == "."
            || file_name == ".."
            || file_name.contains(['/', '\\'])
            || file_name.chars().any(char::is_control)
        {
            return Err(FileNameError::NotAPlainName);
        }
        Ok(Self(file_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug)]
pub struct CreateTrackCommand {
    pub name: TrackName,
    pub duration: TrackDuration,
    pub author_id: AuthorId,
    pub file_name: FileName,
}

/// Partial track update; `None` leaves the field unchanged.
#[derive(Debug)]
pub struct UpdateTrackCommand {
    pub name: Option<TrackName>,
    pub duration: Option<TrackDuration>,
    pub author_id: Option<AuthorId>,
    pub file_name: Option<FileName>,
}

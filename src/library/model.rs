use std::fmt;
use std::hash::{Hash, Hasher};

use uuid::Uuid;

use super::display::render_line;
use super::error::ValidationError;

/// One catalog entry.
///
/// Two tracks are equal when their title and artist match ignoring case and
/// their album, genre and duration match exactly. The `id` never takes part
/// in equality or hashing, which is what makes equality usable for duplicate
/// detection.
#[derive(Debug, Clone)]
pub struct Track {
    id: Uuid,
    title: String,
    artist: String,
    album: String,
    genre: String,
    duration_secs: u32,
}

impl Track {
    /// Create a track with a freshly generated id.
    pub fn new(
        title: &str,
        artist: &str,
        album: Option<&str>,
        genre: Option<&str>,
        duration_secs: i64,
    ) -> Result<Self, ValidationError> {
        Self::with_id(None, title, artist, album, genre, duration_secs)
    }

    /// Create a track, keeping `id` when given and generating one otherwise.
    pub fn with_id(
        id: Option<Uuid>,
        title: &str,
        artist: &str,
        album: Option<&str>,
        genre: Option<&str>,
        duration_secs: i64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: id.unwrap_or_else(Uuid::new_v4),
            title: required(title, ValidationError::EmptyTitle)?,
            artist: required(artist, ValidationError::EmptyArtist)?,
            album: optional(album),
            genre: optional(genre),
            duration_secs: positive_duration(duration_secs)?,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = required(title, ValidationError::EmptyTitle)?;
        Ok(())
    }

    pub fn set_artist(&mut self, artist: &str) -> Result<(), ValidationError> {
        self.artist = required(artist, ValidationError::EmptyArtist)?;
        Ok(())
    }

    /// `None` clears the album.
    pub fn set_album(&mut self, album: Option<&str>) {
        self.album = optional(album);
    }

    /// `None` clears the genre.
    pub fn set_genre(&mut self, genre: Option<&str>) {
        self.genre = optional(genre);
    }

    pub fn set_duration_secs(&mut self, duration_secs: i64) -> Result<(), ValidationError> {
        self.duration_secs = positive_duration(duration_secs)?;
        Ok(())
    }

    /// Human-readable one-line summary, also used by `Display`.
    pub fn render_line(&self) -> String {
        render_line(&self.title, &self.artist, &self.genre, self.duration_secs)
    }
}

fn required(value: &str, err: ValidationError) -> Result<String, ValidationError> {
    let v = value.trim();
    if v.is_empty() {
        Err(err)
    } else {
        Ok(v.to_string())
    }
}

fn optional(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

fn positive_duration(secs: i64) -> Result<u32, ValidationError> {
    if secs <= 0 {
        return Err(ValidationError::NonPositiveDuration(secs));
    }
    u32::try_from(secs).map_err(|_| ValidationError::DurationTooLong(secs))
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.title.to_lowercase() == other.title.to_lowercase()
            && self.artist.to_lowercase() == other.artist.to_lowercase()
            && self.album == other.album
            && self.genre == other.genre
            && self.duration_secs == other.duration_secs
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.to_lowercase().hash(state);
        self.artist.to_lowercase().hash(state);
        self.album.hash(state);
        self.genre.hash(state);
        self.duration_secs.hash(state);
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_line())
    }
}

use crate::library::{Track, ValidationError};

/// Whether an edit touches a field.
///
/// Kept separate from `Option` because an empty album or genre is a real
/// value, not "leave it alone".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    #[default]
    Keep,
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }
}

/// A partial update of a track's content fields.
///
/// Built with the chained setters, e.g. `TrackEdit::new().title("x").duration_secs(200)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackEdit {
    pub title: FieldUpdate<String>,
    pub artist: FieldUpdate<String>,
    pub album: FieldUpdate<String>,
    pub genre: FieldUpdate<String>,
    pub duration_secs: FieldUpdate<i64>,
}

impl TrackEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = FieldUpdate::Set(title.into());
        self
    }

    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = FieldUpdate::Set(artist.into());
        self
    }

    pub fn album(mut self, album: impl Into<String>) -> Self {
        self.album = FieldUpdate::Set(album.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = FieldUpdate::Set(genre.into());
        self
    }

    pub fn duration_secs(mut self, secs: i64) -> Self {
        self.duration_secs = FieldUpdate::Set(secs);
        self
    }

    /// Take the duration from raw user input.
    ///
    /// Blank input leaves the duration alone; anything that is not a whole
    /// number is an error rather than a value that later fails range checks.
    pub fn duration_input(mut self, raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            self.duration_secs = FieldUpdate::Keep;
            return Ok(self);
        }
        let secs = raw.parse::<i64>().map_err(|_| ValidationError::InvalidNumber {
            field: "duration",
            input: raw.to_string(),
        })?;
        self.duration_secs = FieldUpdate::Set(secs);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        !(self.title.is_set()
            || self.artist.is_set()
            || self.album.is_set()
            || self.genre.is_set()
            || self.duration_secs.is_set())
    }

    /// Apply every set field to `track`, stopping at the first invalid value.
    pub(crate) fn apply_to(&self, track: &mut Track) -> Result<(), ValidationError> {
        if let FieldUpdate::Set(title) = &self.title {
            track.set_title(title)?;
        }
        if let FieldUpdate::Set(artist) = &self.artist {
            track.set_artist(artist)?;
        }
        if let FieldUpdate::Set(album) = &self.album {
            track.set_album(Some(album));
        }
        if let FieldUpdate::Set(genre) = &self.genre {
            track.set_genre(Some(genre));
        }
        if let FieldUpdate::Set(secs) = self.duration_secs {
            track.set_duration_secs(secs)?;
        }
        Ok(())
    }
}

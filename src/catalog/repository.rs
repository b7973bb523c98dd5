use log::{debug, info};
use uuid::Uuid;

use crate::library::{Track, ValidationError};
use crate::store::{FileStore, TrackStore};

use super::edit::TrackEdit;
use super::seed::sample_tracks;

/// The authoritative, ordered track collection.
///
/// Insertion order is preserved and no two entries are duplicates of each
/// other at the time they were added. Access is single-threaded; callers that
/// share a catalog must serialize access themselves.
pub struct Catalog<S: TrackStore = FileStore> {
    tracks: Vec<Track>,
    store: S,
}

impl<S: TrackStore> Catalog<S> {
    /// Load the catalog from `store`.
    ///
    /// When nothing was stored and `seed_if_empty` is set, the built-in sample
    /// tracks are added and saved straight away.
    pub fn open(store: S, seed_if_empty: bool) -> Self {
        let mut tracks = store.load();

        if tracks.is_empty() && seed_if_empty {
            tracks = sample_tracks();
            info!("catalog is empty, seeding {} sample tracks", tracks.len());
            store.save(&tracks);
        }

        debug!("catalog opened with {} tracks", tracks.len());
        Self { tracks, store }
    }

    /// Append `track` unless an equal track is already present.
    pub fn add(&mut self, track: Track) -> bool {
        if self.is_duplicate(&track) {
            debug!("rejecting duplicate track: {track}");
            return false;
        }
        self.tracks.push(track);
        self.persist();
        true
    }

    /// Apply `edit` to the track with `id`.
    ///
    /// Returns `Ok(false)` when no track has that id. A replacement value that
    /// fails validation is returned as an error and leaves the track as it was.
    pub fn edit(&mut self, id: Uuid, edit: &TrackEdit) -> Result<bool, ValidationError> {
        let Some(target) = self.tracks.iter_mut().find(|t| t.id() == id) else {
            return Ok(false);
        };

        let mut updated = target.clone();
        edit.apply_to(&mut updated)?;
        *target = updated;

        self.persist();
        Ok(true)
    }

    /// Remove the track with `id`, if any.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.id() != id);
        let removed = self.tracks.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id() == id)
    }

    /// Tracks whose title contains `term`, ignoring case. An empty term matches all.
    pub fn search_by_title(&self, term: &str) -> Vec<&Track> {
        self.search(term, Track::title)
    }

    /// Tracks whose artist contains `term`, ignoring case. An empty term matches all.
    pub fn search_by_artist(&self, term: &str) -> Vec<&Track> {
        self.search(term, Track::artist)
    }

    /// Tracks whose genre contains `term`, ignoring case. An empty term matches all.
    pub fn search_by_genre(&self, term: &str) -> Vec<&Track> {
        self.search(term, Track::genre)
    }

    pub fn list_all(&self) -> &[Track] {
        &self.tracks
    }

    pub fn is_duplicate(&self, track: &Track) -> bool {
        self.tracks.iter().any(|t| t == track)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn search(&self, term: &str, field: fn(&Track) -> &str) -> Vec<&Track> {
        let needle = term.to_lowercase();
        self.tracks
            .iter()
            .filter(|t| field(t).to_lowercase().contains(&needle))
            .collect()
    }

    fn persist(&self) {
        self.store.save(&self.tracks);
    }
}

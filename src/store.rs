//! Durable storage for the catalog.
//!
//! The repository only talks to the [`TrackStore`] trait; [`FileStore`] is the
//! line-per-track text file implementation.

mod file;

pub use file::FileStore;

use crate::library::Track;

/// Loads and saves the full set of tracks.
///
/// Implementations absorb their own I/O failures: `load` degrades to an empty
/// (or partial) result and `save` reports the problem without returning it.
pub trait TrackStore {
    /// Read every stored track, in stored order.
    fn load(&self) -> Vec<Track>;

    /// Replace the stored contents with `tracks`, in the given order.
    fn save(&self, tracks: &[Track]);
}

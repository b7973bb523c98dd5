//! trackshelf: a single-user music track catalog kept in a flat text file.
//!
//! The [`catalog::Catalog`] owns the in-memory track list and writes the full
//! list back through a [`store::TrackStore`] after every successful change.

pub mod catalog;
pub mod codec;
pub mod config;
pub mod library;
pub mod store;

pub use catalog::{Catalog, FieldUpdate, TrackEdit};
pub use library::{Track, ValidationError};
pub use store::{FileStore, TrackStore};

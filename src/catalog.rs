//! The catalog repository: the in-memory track list plus persistence.
//!
//! Reads never touch the disk. Every successful mutation writes the whole
//! catalog back through the store; failed or no-op mutations write nothing.

mod edit;
mod repository;
mod seed;

pub use edit::{FieldUpdate, TrackEdit};
pub use repository::Catalog;
pub use seed::sample_tracks;

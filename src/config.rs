//! Configuration loader and schema types.
//!
//! Settings decide where the catalog file lives, whether an empty catalog is
//! seeded, and how chatty logging is.

mod load;
mod schema;

pub use load::{default_config_path, default_data_path, resolve_config_path};
pub use schema::*;

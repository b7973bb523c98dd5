//! Track record model.
//!
//! A `Track` is one catalog entry. All content fields are validated on
//! construction and on every setter, so a `Track` value is always valid.

mod display;
mod error;
mod model;

pub use display::render_line;
pub use error::ValidationError;
pub use model::Track;

//! Line codec for the catalog file.
//!
//! Each track is stored as one line of six `;`-separated fields:
//!
//! ```text
//! <uuid>;<title>;<artist>;<album>;<genre>;<duration_secs>
//! ```
//!
//! Inside a field `\` is written as `\\`, `;` as `\;` and a newline as the
//! two characters `\n`. Decoding splits the line first (honouring escapes but
//! keeping them) and then unescapes each field on its own.

mod escape;
mod line;

pub use escape::{escape, split_fields, unescape};
pub use line::{DecodeError, decode_line, encode_line};

/// Field separator.
pub const DELIMITER: char = ';';
/// Escape character.
pub const ESCAPE: char = '\\';

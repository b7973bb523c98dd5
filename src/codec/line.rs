use std::num::ParseIntError;

use thiserror::Error;
use uuid::Uuid;

use crate::library::{Track, ValidationError};

use super::escape::{escape, split_fields, unescape};
use super::DELIMITER;

const FIELD_COUNT: usize = 6;

/// Why a stored line could not be turned back into a track.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("expected 6 fields, found {0}")]
    MissingFields(usize),

    #[error("invalid track id {input:?}: {source}")]
    InvalidId {
        input: String,
        #[source]
        source: uuid::Error,
    },

    #[error("invalid duration {input:?}: {source}")]
    InvalidDuration {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    InvalidTrack(#[from] ValidationError),
}

/// Encode a track as one line, without a trailing newline.
pub fn encode_line(track: &Track) -> String {
    let fields = [
        track.id().to_string(),
        escape(track.title()),
        escape(track.artist()),
        escape(track.album()),
        escape(track.genre()),
        track.duration_secs().to_string(),
    ];
    fields.join(&DELIMITER.to_string())
}

/// Decode one stored line. Fields past the sixth are ignored.
pub fn decode_line(line: &str) -> Result<Track, DecodeError> {
    let fields: Vec<String> = split_fields(line).iter().map(|f| unescape(f)).collect();
    if fields.len() < FIELD_COUNT {
        return Err(DecodeError::MissingFields(fields.len()));
    }

    let id = Uuid::parse_str(&fields[0]).map_err(|source| DecodeError::InvalidId {
        input: fields[0].clone(),
        source,
    })?;
    let duration: i64 = fields[5]
        .parse()
        .map_err(|source| DecodeError::InvalidDuration {
            input: fields[5].clone(),
            source,
        })?;

    let track = Track::with_id(
        Some(id),
        &fields[1],
        &fields[2],
        Some(&fields[3]),
        Some(&fields[4]),
        duration,
    )?;
    Ok(track)
}

//! One-shot subcommands over the catalog.
//!
//! Parsing only checks the shape of the arguments; track validation and
//! duplicate detection are left to the catalog itself.

use std::io::{self, Write};

use thiserror::Error;
use trackshelf::{Catalog, Track, TrackEdit, TrackStore, ValidationError};
use uuid::Uuid;

pub const USAGE: &str = "\
usage: trackshelf <command> [args]

commands:
  list                                   list every track
  show <id>                              show one track
  search <title|artist|genre> <term>     case-insensitive substring search
  add <title> <artist> --duration <secs> [--album <album>] [--genre <genre>]
  edit <id> [--title <t>] [--artist <a>] [--album <a>] [--genre <g>] [--duration <secs>]
  remove <id>                            delete a track
  config                                 print the effective settings
  help                                   show this message";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing command")]
    MissingCommand,

    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),

    #[error("{0:?} is not a track id")]
    InvalidId(String),

    #[error("cannot search by {0:?}, expected title, artist or genre")]
    UnknownSearchField(String),

    #[error(transparent)]
    InvalidValue(#[from] ValidationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Artist,
    Genre,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    List,
    Show(Uuid),
    Search {
        field: SearchField,
        term: String,
    },
    Add {
        title: String,
        artist: String,
        album: Option<String>,
        genre: Option<String>,
        duration_secs: i64,
    },
    Edit {
        id: Uuid,
        edit: TrackEdit,
    },
    Remove(Uuid),
    Config,
    Help,
}

/// Whether the command did what was asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Rejected,
}

impl Command {
    pub fn parse(args: &[String]) -> Result<Self, UsageError> {
        let Some((name, rest)) = args.split_first() else {
            return Err(UsageError::MissingCommand);
        };

        match name.as_str() {
            "list" | "ls" => {
                no_more(rest)?;
                Ok(Self::List)
            }
            "show" => {
                let (id, rest) = take(rest, "track id")?;
                no_more(rest)?;
                Ok(Self::Show(parse_id(id)?))
            }
            "search" => {
                let (field, rest) = take(rest, "search field")?;
                let field = match field.to_ascii_lowercase().as_str() {
                    "title" => SearchField::Title,
                    "artist" => SearchField::Artist,
                    "genre" => SearchField::Genre,
                    _ => return Err(UsageError::UnknownSearchField(field.clone())),
                };
                // A missing term searches for everything.
                let term = rest.join(" ");
                Ok(Self::Search { field, term })
            }
            "add" => parse_add(rest),
            "edit" => parse_edit(rest),
            "remove" | "rm" => {
                let (id, rest) = take(rest, "track id")?;
                no_more(rest)?;
                Ok(Self::Remove(parse_id(id)?))
            }
            "config" => Ok(Self::Config),
            "help" | "-h" | "--help" => Ok(Self::Help),
            other => Err(UsageError::UnknownCommand(other.to_string())),
        }
    }
}

fn take<'a>(
    args: &'a [String],
    what: &'static str,
) -> Result<(&'a String, &'a [String]), UsageError> {
    args.split_first().ok_or(UsageError::MissingArgument(what))
}

fn no_more(args: &[String]) -> Result<(), UsageError> {
    match args.first() {
        Some(extra) => Err(UsageError::UnexpectedArgument(extra.clone())),
        None => Ok(()),
    }
}

fn parse_id(raw: &str) -> Result<Uuid, UsageError> {
    Uuid::parse_str(raw.trim()).map_err(|_| UsageError::InvalidId(raw.to_string()))
}

fn parse_add(args: &[String]) -> Result<Command, UsageError> {
    let mut positional = Vec::new();
    let mut album = None;
    let mut genre = None;
    let mut duration = None;

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--album" => album = Some(it.next().ok_or(UsageError::MissingArgument("album"))?.clone()),
            "--genre" => genre = Some(it.next().ok_or(UsageError::MissingArgument("genre"))?.clone()),
            "--duration" => {
                duration = Some(it.next().ok_or(UsageError::MissingArgument("duration"))?)
            }
            flag if flag.starts_with("--") => {
                return Err(UsageError::UnexpectedArgument(flag.to_string()));
            }
            _ => positional.push(arg.clone()),
        }
    }

    let mut positional = positional.into_iter();
    let title = positional.next().ok_or(UsageError::MissingArgument("title"))?;
    let artist = positional.next().ok_or(UsageError::MissingArgument("artist"))?;
    if let Some(extra) = positional.next() {
        return Err(UsageError::UnexpectedArgument(extra));
    }

    let raw = duration.ok_or(UsageError::MissingArgument("duration"))?;
    let duration_secs = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field: "duration",
            input: raw.clone(),
        })?;

    Ok(Command::Add {
        title,
        artist,
        album,
        genre,
        duration_secs,
    })
}

fn parse_edit(args: &[String]) -> Result<Command, UsageError> {
    let (id, rest) = take(args, "track id")?;
    let id = parse_id(id)?;

    let mut edit = TrackEdit::new();
    let mut it = rest.iter();
    while let Some(flag) = it.next() {
        let mut value = |name| it.next().ok_or(UsageError::MissingArgument(name));
        edit = match flag.as_str() {
            "--title" => edit.title(value("title")?),
            "--artist" => edit.artist(value("artist")?),
            "--album" => edit.album(value("album")?),
            "--genre" => edit.genre(value("genre")?),
            "--duration" => edit.duration_input(value("duration")?)?,
            other => return Err(UsageError::UnexpectedArgument(other.to_string())),
        };
    }

    Ok(Command::Edit { id, edit })
}

/// Run `command` against `catalog`, writing human-readable results to `out`.
pub fn execute<S: TrackStore>(
    command: Command,
    catalog: &mut Catalog<S>,
    out: &mut impl Write,
) -> io::Result<Outcome> {
    match command {
        Command::List => {
            if catalog.is_empty() {
                writeln!(out, "catalog is empty")?;
            }
            for track in catalog.list_all() {
                write_row(out, track)?;
            }
            Ok(Outcome::Done)
        }
        Command::Show(id) => match catalog.find_by_id(id) {
            Some(track) => {
                writeln!(out, "id:       {}", track.id())?;
                writeln!(out, "title:    {}", track.title())?;
                writeln!(out, "artist:   {}", track.artist())?;
                writeln!(out, "album:    {}", track.album())?;
                writeln!(out, "genre:    {}", track.genre())?;
                writeln!(out, "duration: {}s", track.duration_secs())?;
                Ok(Outcome::Done)
            }
            None => not_found(out, id),
        },
        Command::Search { field, term } => {
            let matches = match field {
                SearchField::Title => catalog.search_by_title(&term),
                SearchField::Artist => catalog.search_by_artist(&term),
                SearchField::Genre => catalog.search_by_genre(&term),
            };
            if matches.is_empty() {
                writeln!(out, "no matches")?;
            }
            for track in matches {
                write_row(out, track)?;
            }
            Ok(Outcome::Done)
        }
        Command::Add {
            title,
            artist,
            album,
            genre,
            duration_secs,
        } => {
            let track = match Track::new(
                &title,
                &artist,
                album.as_deref(),
                genre.as_deref(),
                duration_secs,
            ) {
                Ok(track) => track,
                Err(e) => return invalid(out, &e),
            };
            let id = track.id();
            if catalog.add(track) {
                writeln!(out, "added {id}")?;
                Ok(Outcome::Done)
            } else {
                writeln!(out, "duplicate: an identical track is already in the catalog")?;
                Ok(Outcome::Rejected)
            }
        }
        Command::Edit { id, edit } => {
            if edit.is_empty() {
                writeln!(out, "nothing to change")?;
                return Ok(Outcome::Rejected);
            }
            match catalog.edit(id, &edit) {
                Ok(true) => {
                    writeln!(out, "updated {id}")?;
                    Ok(Outcome::Done)
                }
                Ok(false) => not_found(out, id),
                Err(e) => invalid(out, &e),
            }
        }
        Command::Remove(id) => {
            if catalog.remove(id) {
                writeln!(out, "removed {id}")?;
                Ok(Outcome::Done)
            } else {
                not_found(out, id)
            }
        }
        // Handled before the catalog is opened.
        Command::Config | Command::Help => Ok(Outcome::Done),
    }
}

fn write_row(out: &mut impl Write, track: &Track) -> io::Result<()> {
    writeln!(out, "{}  {}", track.id(), track.render_line())
}

fn not_found(out: &mut impl Write, id: Uuid) -> io::Result<Outcome> {
    writeln!(out, "no track with id {id}")?;
    Ok(Outcome::Rejected)
}

fn invalid(out: &mut impl Write, err: &ValidationError) -> io::Result<Outcome> {
    writeln!(out, "invalid track: {err}")?;
    Ok(Outcome::Rejected)
}

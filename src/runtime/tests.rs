use super::command::*;
use tempfile::tempdir;
use trackshelf::{Catalog, FieldUpdate, FileStore, TrackEdit, ValidationError};
use uuid::Uuid;

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn run_cmd(catalog: &mut Catalog, parts: &[&str]) -> (Outcome, String) {
    let cmd = Command::parse(&args(parts)).unwrap();
    let mut out = Vec::new();
    let outcome = execute(cmd, catalog, &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn parse_rejects_missing_and_unknown_commands() {
    assert_eq!(Command::parse(&[]), Err(UsageError::MissingCommand));
    assert_eq!(
        Command::parse(&args(&["frobnicate"])),
        Err(UsageError::UnknownCommand("frobnicate".into()))
    );
    assert_eq!(
        Command::parse(&args(&["list", "extra"])),
        Err(UsageError::UnexpectedArgument("extra".into()))
    );
}

#[test]
fn parse_search_joins_term_and_allows_empty() {
    assert_eq!(
        Command::parse(&args(&["search", "Artist", "the", "beatles"])),
        Ok(Command::Search {
            field: SearchField::Artist,
            term: "the beatles".into(),
        })
    );
    assert_eq!(
        Command::parse(&args(&["search", "title"])),
        Ok(Command::Search {
            field: SearchField::Title,
            term: String::new(),
        })
    );
    assert_eq!(
        Command::parse(&args(&["search", "album", "x"])),
        Err(UsageError::UnknownSearchField("album".into()))
    );
}

#[test]
fn parse_add_reads_flags_and_positionals() {
    assert_eq!(
        Command::parse(&args(&[
            "add", "Imagine", "--genre", "Pop", "John Lennon", "--duration", "183"
        ])),
        Ok(Command::Add {
            title: "Imagine".into(),
            artist: "John Lennon".into(),
            album: None,
            genre: Some("Pop".into()),
            duration_secs: 183,
        })
    );
    assert_eq!(
        Command::parse(&args(&["add", "Imagine", "John Lennon"])),
        Err(UsageError::MissingArgument("duration"))
    );
    assert!(matches!(
        Command::parse(&args(&["add", "T", "A", "--duration", "3m"])),
        Err(UsageError::InvalidValue(ValidationError::InvalidNumber { .. }))
    ));
}

#[test]
fn parse_edit_builds_partial_update() {
    let id = Uuid::new_v4();
    let id_str = id.to_string();
    let cmd = Command::parse(&args(&["edit", &id_str, "--album", "", "--duration", "200"])).unwrap();
    let Command::Edit { id: parsed, edit } = cmd else {
        panic!("expected edit command");
    };
    assert_eq!(parsed, id);
    assert_eq!(edit.title, FieldUpdate::Keep);
    assert_eq!(edit.album, FieldUpdate::Set(String::new()));
    assert_eq!(edit.duration_secs, FieldUpdate::Set(200));

    assert_eq!(
        Command::parse(&args(&["edit", "nope"])),
        Err(UsageError::InvalidId("nope".into()))
    );
    assert_eq!(
        Command::parse(&args(&["edit", &id_str, "--title"])),
        Err(UsageError::MissingArgument("title"))
    );
    assert!(matches!(
        Command::parse(&args(&["edit", &id_str, "--duration", "abc"])),
        Err(UsageError::InvalidValue(ValidationError::InvalidNumber { .. }))
    ));
}

#[test]
fn execute_add_list_edit_remove_round_trip() {
    let dir = tempdir().unwrap();
    let mut catalog = Catalog::open(FileStore::new(dir.path().join("tracks.txt")), false);

    let (outcome, text) = run_cmd(&mut catalog, &["list"]);
    assert_eq!(outcome, Outcome::Done);
    assert_eq!(text, "catalog is empty\n");

    let (outcome, text) = run_cmd(
        &mut catalog,
        &["add", "Hey Jude", "The Beatles", "--genre", "Rock", "--duration", "431"],
    );
    assert_eq!(outcome, Outcome::Done);
    assert!(text.starts_with("added "));
    let id = catalog.list_all()[0].id();

    let (outcome, text) = run_cmd(
        &mut catalog,
        &["add", "hey jude", "the beatles", "--genre", "Rock", "--duration", "431"],
    );
    assert_eq!(outcome, Outcome::Rejected);
    assert!(text.starts_with("duplicate"));
    assert_eq!(catalog.len(), 1);

    let (_, text) = run_cmd(&mut catalog, &["search", "artist", "BEATLES"]);
    assert_eq!(text, format!("{id}  Hey Jude - The Beatles (Rock) [431s]\n"));

    let id_str = id.to_string();
    let (outcome, _) = run_cmd(&mut catalog, &["edit", &id_str, "--duration", "0"]);
    assert_eq!(outcome, Outcome::Rejected);
    assert_eq!(catalog.find_by_id(id).unwrap().duration_secs(), 431);

    let (outcome, _) = run_cmd(&mut catalog, &["edit", &id_str, "--title", "Let It Be"]);
    assert_eq!(outcome, Outcome::Done);
    assert_eq!(catalog.find_by_id(id).unwrap().title(), "Let It Be");

    let (outcome, text) = run_cmd(&mut catalog, &["remove", &Uuid::new_v4().to_string()]);
    assert_eq!(outcome, Outcome::Rejected);
    assert!(text.starts_with("no track with id"));

    let (outcome, _) = run_cmd(&mut catalog, &["remove", &id_str]);
    assert_eq!(outcome, Outcome::Done);
    assert!(catalog.is_empty());
}

#[test]
fn execute_add_reports_invalid_track() {
    let dir = tempdir().unwrap();
    let mut catalog = Catalog::open(FileStore::new(dir.path().join("tracks.txt")), false);

    let (outcome, text) = run_cmd(&mut catalog, &["add", "  ", "Artist", "--duration", "10"]);
    assert_eq!(outcome, Outcome::Rejected);
    assert_eq!(text, "invalid track: title must not be empty\n");
    assert!(catalog.is_empty());
}

#[test]
fn execute_edit_without_changes_is_rejected() {
    let dir = tempdir().unwrap();
    let mut catalog = Catalog::open(FileStore::new(dir.path().join("tracks.txt")), true);
    let id = catalog.list_all()[0].id();

    let cmd = Command::Edit {
        id,
        edit: TrackEdit::new(),
    };
    let mut out = Vec::new();
    assert_eq!(execute(cmd, &mut catalog, &mut out).unwrap(), Outcome::Rejected);
    assert_eq!(String::from_utf8(out).unwrap(), "nothing to change\n");
}

use crate::library::Track;

const SAMPLES: &[(&str, &str, &str, &str, i64)] = &[
    ("Imagine", "John Lennon", "Imagine", "Pop", 183),
    ("Billie Jean", "Michael Jackson", "Thriller", "Pop", 294),
    ("Smells Like Teen Spirit", "Nirvana", "Nevermind", "Rock", 301),
];

/// The built-in tracks used to populate a brand new catalog.
pub fn sample_tracks() -> Vec<Track> {
    SAMPLES
        .iter()
        .filter_map(|&(title, artist, album, genre, secs)| {
            Track::new(title, artist, Some(album), Some(genre), secs).ok()
        })
        .collect()
}

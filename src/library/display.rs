/// Build the one-line summary shown for a track: `Title - Artist (Genre) [183s]`.
///
/// An empty genre still renders its parentheses so every line keeps the same shape.
pub fn render_line(title: &str, artist: &str, genre: &str, duration_secs: u32) -> String {
    format!("{title} - {artist} ({genre}) [{duration_secs}s]")
}

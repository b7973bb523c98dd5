use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::codec::{decode_line, encode_line};
use crate::library::Track;

use super::TrackStore;

/// Track store backed by a single text file.
///
/// Nothing is created on disk until the first [`save`](TrackStore::save).
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `tracks` to the file, creating its parent directories first.
    pub fn write_all(&self, tracks: &[Track]) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        if !self.path.exists() {
            info!("creating catalog file at {}", self.path.display());
        }

        let mut content = String::new();
        for track in tracks {
            content.push_str(&encode_line(track));
            content.push('\n');
        }
        fs::write(&self.path, content)
    }

    fn read_content(&self) -> io::Result<Option<String>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

impl TrackStore for FileStore {
    fn load(&self) -> Vec<Track> {
        let content = match self.read_content() {
            Ok(Some(content)) => content,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!("failed to read {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        let mut tracks = Vec::new();
        for (n, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match decode_line(line) {
                Ok(track) => tracks.push(track),
                Err(e) => warn!(
                    "{}:{}: skipping invalid line: {e}: {line}",
                    self.path.display(),
                    n + 1
                ),
            }
        }

        debug!("loaded {} tracks from {}", tracks.len(), self.path.display());
        tracks
    }

    fn save(&self, tracks: &[Track]) {
        match self.write_all(tracks) {
            Ok(()) => debug!("saved {} tracks to {}", tracks.len(), self.path.display()),
            Err(e) => error!("failed to save {}: {e}", self.path.display()),
        }
    }
}

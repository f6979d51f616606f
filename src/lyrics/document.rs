use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while building a [`LyricDocument`].
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file could not be opened or read.
    #[error("cannot read lyric file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file was read but is not valid UTF-8.
    #[error("lyric file {} is not valid UTF-8", path.display())]
    Decode { path: PathBuf },
    /// Nothing but blank lines survived parsing.
    #[error("no lyrics found: the file contains no song")]
    Empty,
}

impl DocumentError {
    /// `true` for failures to obtain the text at all (missing file, bad encoding).
    pub fn is_read_error(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Decode { .. })
    }
}

/// One song block: a title plus its lyric lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub lines: Vec<String>,
}

impl Song {
    /// `lines` must already be trimmed of leading and trailing blank lines.
    fn from_block(lines: Vec<String>) -> Option<Self> {
        let title = lines.first()?.trim().to_string();
        Some(Self { title, lines })
    }
}

/// Immutable set of songs parsed from a lyric file, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricDocument {
    songs: Vec<Song>,
}

/// Blank lines in a row needed to start a new song.
const SEPARATOR_BLANK_LINES: usize = 2;

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

impl LyricDocument {
    /// Split `text` into songs on runs of two or more blank lines.
    ///
    /// A single blank line stays inside the song (verse breaks). Blank lines
    /// at either end of a block are dropped, and blocks that end up empty are
    /// skipped.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut blocks: Vec<Vec<&str>> = vec![Vec::new()];
        let mut pending_blank: Vec<&str> = Vec::new();

        for line in text.lines() {
            if is_blank(line) {
                pending_blank.push(line);
                continue;
            }
            if pending_blank.len() >= SEPARATOR_BLANK_LINES {
                blocks.push(Vec::new());
            } else if let Some(current) = blocks.last_mut() {
                current.append(&mut pending_blank);
            }
            pending_blank.clear();
            if let Some(current) = blocks.last_mut() {
                current.push(line);
            }
        }

        let songs: Vec<Song> = blocks
            .into_iter()
            .filter_map(|block| {
                let start = block.iter().position(|l| !is_blank(l))?;
                let end = block.iter().rposition(|l| !is_blank(l))?;
                let lines = block[start..=end].iter().map(|l| l.to_string()).collect();
                Song::from_block(lines)
            })
            .collect();

        if songs.is_empty() {
            return Err(DocumentError::Empty);
        }

        tracing::debug!(songs = songs.len(), "parsed lyric document");
        Ok(Self { songs })
    }

    /// Read and parse a lyric file.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let bytes = fs::read(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| DocumentError::Decode {
            path: path.to_path_buf(),
        })?;

        let document = Self::parse(&text)?;
        tracing::info!(
            path = %path.display(),
            songs = document.len(),
            "loaded lyric file"
        );
        Ok(document)
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn song(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    /// Song titles in file order, for the directory list.
    pub fn titles(&self) -> Vec<&str> {
        self.songs.iter().map(|s| s.title.as_str()).collect()
    }

    /// Number of songs. Never zero.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl FromStr for LyricDocument {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::lyrics::LyricDocument;

/// Preferred lyric file name when several `.txt` files sit side by side.
pub const PREFERRED_FILE_NAME: &str = "歌词文件.txt";

/// Pick the lyric file to open.
///
/// An explicit path wins when it exists, then the configured one, then a
/// `.txt` file found in `search_dirs` (first directory with any match wins).
pub fn resolve_lyrics_path(
    explicit: Option<&Path>,
    configured: Option<&Path>,
    search_dirs: &[PathBuf],
) -> Result<PathBuf> {
    for candidate in [explicit, configured].into_iter().flatten() {
        if candidate.exists() {
            return Ok(candidate.to_path_buf());
        }
        tracing::warn!(path = %candidate.display(), "lyric file not found, searching instead");
    }

    for dir in search_dirs {
        if let Some(found) = find_lyrics_file(dir) {
            tracing::info!(path = %found.display(), "discovered lyric file");
            return Ok(found);
        }
    }

    let searched: Vec<String> = search_dirs.iter().map(|d| d.display().to_string()).collect();
    Err(anyhow!(
        "no lyric file (.txt) found in {}",
        searched.join(", ")
    ))
}

/// The preferred file if present, else the first `.txt` by name.
pub fn find_lyrics_file(dir: &Path) -> Option<PathBuf> {
    let candidates: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
        .collect();

    candidates
        .iter()
        .find(|p| p.file_name().is_some_and(|n| n == PREFERRED_FILE_NAME))
        .or_else(|| candidates.first())
        .cloned()
}

/// Load the document at `path`, worded for the startup error report.
pub fn load_document(path: &Path) -> Result<LyricDocument> {
    LyricDocument::load(path).map_err(|e| {
        tracing::error!(error = %e, "cannot load lyrics");
        let hint = if e.is_read_error() {
            format!("failed to open lyrics from {}", path.display())
        } else {
            format!(
                "{} has no songs; separate songs with two blank lines",
                path.display()
            )
        };
        anyhow::Error::new(e).context(hint)
    })
}

/// Directory of the running executable, then the working directory.
pub fn default_search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }
    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.contains(&cwd) {
            dirs.push(cwd);
        }
    }
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_prefers_named_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::write(dir.path().join(PREFERRED_FILE_NAME), "x").unwrap();
        let found = find_lyrics_file(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), PREFERRED_FILE_NAME);
    }

    #[test]
    fn test_first_txt_by_name_and_ignores_others() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.md"), "x").unwrap();
        fs::write(dir.path().join("b.txt"), "x").unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("0.txt"), "x").unwrap();

        let found = find_lyrics_file(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "a.txt");
    }

    #[test]
    fn test_explicit_path_wins_and_missing_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("mine.txt");
        fs::write(&explicit, "x").unwrap();
        let search = vec![dir.path().to_path_buf()];

        let path = resolve_lyrics_path(Some(&explicit), None, &search).unwrap();
        assert_eq!(path, explicit);

        let missing = dir.path().join("gone.txt");
        let path = resolve_lyrics_path(Some(&missing), None, &search).unwrap();
        assert_eq!(path, explicit);
    }

    #[test]
    fn test_nothing_found_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_lyrics_path(None, None, &[dir.path().to_path_buf()]).unwrap_err();
        assert!(err.to_string().contains("no lyric file"));
    }

    #[test]
    fn test_load_document_words_errors_by_kind() {
        let dir = tempfile::tempdir().unwrap();

        let missing = load_document(&dir.path().join("gone.txt")).unwrap_err();
        assert!(missing.to_string().starts_with("failed to open lyrics"));

        let blank = dir.path().join("blank.txt");
        fs::write(&blank, "\n \n\n").unwrap();
        let empty = load_document(&blank).unwrap_err();
        assert!(empty.to_string().contains("has no songs"));

        fs::write(&blank, "Title\nline").unwrap();
        assert_eq!(load_document(&blank).unwrap().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_lyric_file_is_found() {
        let store = tempfile::tempdir().unwrap();
        let target = store.path().join("real.txt");
        fs::write(&target, "x").unwrap();

        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join(PREFERRED_FILE_NAME)).unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();

        let found = find_lyrics_file(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), PREFERRED_FILE_NAME);
    }
}

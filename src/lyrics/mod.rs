//! Lyric file model and paging.
//!
//! [`LyricDocument`] turns a flat text file into songs, [`PagingCursor`]
//! walks it one fixed-size page at a time. Neither knows about the terminal.

pub mod cursor;
pub mod document;

pub use cursor::{PagingCursor, DEFAULT_PAGE_SIZE};
pub use document::{DocumentError, LyricDocument, Song};

use super::document::{LyricDocument, Song};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Position within a [`LyricDocument`]: which song, and which line the page
/// starts on.
///
/// Every move is clamped; nothing here can fail once the document exists.
#[derive(Debug, Clone)]
pub struct PagingCursor {
    document: LyricDocument,
    song_index: usize,
    start_line: usize,
    page_size: usize,
}

impl PagingCursor {
    /// A zero `page_size` is raised to one.
    pub fn new(document: LyricDocument, page_size: usize) -> Self {
        Self {
            document,
            song_index: 0,
            start_line: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn document(&self) -> &LyricDocument {
        &self.document
    }

    pub fn current_song(&self) -> &Song {
        // song_index is kept below document.len() and documents are never empty
        &self.document.songs()[self.song_index]
    }

    pub fn song_index(&self) -> usize {
        self.song_index
    }

    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn song_count(&self) -> usize {
        self.document.len()
    }

    fn max_start_line(&self) -> usize {
        self.current_song().lines.len().saturating_sub(1)
    }

    fn clamp_start_line(&mut self) {
        self.start_line = self.start_line.min(self.max_start_line());
    }

    /// The page to draw: exactly `page_size` entries, with short pages
    /// centered between blank lines (the extra blank goes at the bottom).
    pub fn visible_lines(&mut self) -> Vec<&str> {
        self.clamp_start_line();

        let lines = &self.document.songs()[self.song_index].lines;
        let end = (self.start_line + self.page_size).min(lines.len());
        let slice = &lines[self.start_line..end];

        let deficit = self.page_size - slice.len();
        let padding_top = deficit / 2;
        let padding_bottom = deficit - padding_top;

        let mut page = Vec::with_capacity(self.page_size);
        page.extend(std::iter::repeat_n("", padding_top));
        page.extend(slice.iter().map(String::as_str));
        page.extend(std::iter::repeat_n("", padding_bottom));
        page
    }

    pub fn scroll_up(&mut self) {
        self.clamp_start_line();
        self.start_line = self.start_line.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.start_line = (self.start_line + 1).min(self.max_start_line());
    }

    pub fn next_song(&mut self) {
        if self.song_index + 1 < self.song_count() {
            self.select(self.song_index + 1);
        }
    }

    pub fn prev_song(&mut self) {
        if self.song_index > 0 {
            self.select(self.song_index - 1);
        }
    }

    /// Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.song_count() {
            self.select(index);
        }
    }

    fn select(&mut self, index: usize) {
        self.song_index = index;
        self.start_line = 0;
        tracing::debug!(
            song = index,
            title = %self.current_song().title,
            "song selected"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> LyricDocument {
        LyricDocument::parse(text).unwrap()
    }

    fn numbered_song(title: &str, count: usize) -> String {
        let mut text = title.to_string();
        for i in 1..count {
            text.push_str(&format!("\nline {}", i));
        }
        text
    }

    #[test]
    fn test_new_starts_at_first_song_top() {
        let cursor = PagingCursor::new(doc("A\nB\n\n\nC"), DEFAULT_PAGE_SIZE);
        assert_eq!(cursor.song_index(), 0);
        assert_eq!(cursor.start_line(), 0);
        assert_eq!(cursor.page_size(), 10);
        assert_eq!(cursor.song_count(), 2);
    }

    #[test]
    fn test_zero_page_size_is_raised() {
        let mut cursor = PagingCursor::new(doc("A"), 0);
        assert_eq!(cursor.page_size(), 1);
        assert_eq!(cursor.visible_lines(), vec!["A"]);
    }

    #[test]
    fn test_visible_lines_always_page_size() {
        for page_size in 1..=12 {
            let mut cursor =
                PagingCursor::new(doc(&numbered_song("T", 7)), page_size);
            for _ in 0..10 {
                assert_eq!(cursor.visible_lines().len(), page_size);
                cursor.scroll_down();
            }
        }
    }

    #[test]
    fn test_short_song_is_centered() {
        let mut cursor = PagingCursor::new(doc("A\nB\nC"), 10);
        // deficit 7: 3 above, 4 below
        assert_eq!(
            cursor.visible_lines(),
            vec!["", "", "", "A", "B", "C", "", "", "", ""]
        );
    }

    #[test]
    fn test_full_page_has_no_padding() {
        let mut cursor = PagingCursor::new(doc(&numbered_song("T", 15)), 10);
        let page = cursor.visible_lines();
        assert_eq!(page.first(), Some(&"T"));
        assert_eq!(page.last(), Some(&"line 9"));
    }

    #[test]
    fn test_scroll_down_to_last_line() {
        let mut cursor = PagingCursor::new(doc(&numbered_song("T", 5)), 4);
        for _ in 0..5 {
            cursor.scroll_down();
        }
        assert_eq!(cursor.start_line(), 4);
        // one real line, deficit 3: 1 above, 2 below
        assert_eq!(cursor.visible_lines(), vec!["", "line 4", "", ""]);
    }

    #[test]
    fn test_scroll_bounds_are_no_ops() {
        let mut cursor = PagingCursor::new(doc("A\nB\nC"), 10);
        cursor.scroll_up();
        assert_eq!(cursor.start_line(), 0);

        cursor.scroll_down();
        cursor.scroll_down();
        assert_eq!(cursor.start_line(), 2);
        cursor.scroll_down();
        assert_eq!(cursor.start_line(), 2);

        cursor.scroll_up();
        assert_eq!(cursor.start_line(), 1);
    }

    #[test]
    fn test_song_navigation_clamps_and_resets_scroll() {
        let mut cursor = PagingCursor::new(doc("A\n1\n2\n\n\nB\n1\n\n\nC"), 10);
        cursor.prev_song();
        assert_eq!(cursor.song_index(), 0);

        cursor.scroll_down();
        assert_eq!(cursor.start_line(), 1);
        cursor.next_song();
        assert_eq!(cursor.song_index(), 1);
        assert_eq!(cursor.start_line(), 0);

        cursor.next_song();
        cursor.scroll_down();
        assert_eq!(cursor.song_index(), 2);
        // single-line song cannot scroll
        assert_eq!(cursor.start_line(), 0);

        cursor.next_song();
        assert_eq!(cursor.song_index(), 2);

        cursor.prev_song();
        assert_eq!(cursor.song_index(), 1);
        assert_eq!(cursor.current_song().title, "B");
    }

    #[test]
    fn test_failed_move_keeps_scroll() {
        let mut cursor = PagingCursor::new(doc("A\n1\n2"), 10);
        cursor.scroll_down();
        cursor.next_song();
        assert_eq!(cursor.start_line(), 1);
    }

    #[test]
    fn test_jump_to() {
        let mut cursor = PagingCursor::new(doc("A\n1\n\n\nB\n1\n\n\nC"), 10);
        cursor.jump_to(2);
        assert_eq!(cursor.song_index(), 2);

        cursor.jump_to(0);
        cursor.scroll_down();
        cursor.jump_to(3);
        assert_eq!(cursor.song_index(), 0);
        assert_eq!(cursor.start_line(), 1);

        cursor.jump_to(1);
        assert_eq!(cursor.song_index(), 1);
        assert_eq!(cursor.start_line(), 0);
    }
}

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to at most `max_width` terminal columns, appending "…" if cut.
/// Wide (CJK) characters count as two columns.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Fit a centered page into `rows` when the terminal is too short for it.
///
/// Blank padding around the text goes first; what still does not fit is cut
/// from the bottom. Returns the rows to draw and how many lyric lines were cut.
pub fn fit_rows<'a>(lines: &[&'a str], rows: usize) -> (Vec<&'a str>, usize) {
    if lines.len() <= rows {
        return (lines.to_vec(), 0);
    }
    let first = lines.iter().position(|l| !l.trim().is_empty()).unwrap_or(0);
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(first, |i| i + 1);
    let text = &lines[first..end];

    if text.len() > rows {
        return (text[..rows].to_vec(), text.len() - rows);
    }
    let top = (rows - text.len()) / 2;
    let mut out = vec![""; top];
    out.extend_from_slice(text);
    out.resize(rows, "");
    (out, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncates_by_columns() {
        assert_eq!(truncate("hello world", 6), "hello…");
        // each CJK char is two columns
        assert_eq!(truncate("月亮代表我的心", 7), "月亮代…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_fit_rows_keeps_page_that_fits() {
        let page = ["", "a", "b", ""];
        assert_eq!(fit_rows(&page, 4), (page.to_vec(), 0));
        assert_eq!(fit_rows(&page, 9), (page.to_vec(), 0));
    }

    #[test]
    fn test_fit_rows_drops_padding_before_text() {
        let page = ["", "", "a", "b", "", ""];
        assert_eq!(fit_rows(&page, 3), (vec!["a", "b", ""], 0));
        assert_eq!(fit_rows(&page, 2), (vec!["a", "b"], 0));
    }

    #[test]
    fn test_fit_rows_reports_cut_lines() {
        let page = ["a", "", "b", "c"];
        assert_eq!(fit_rows(&page, 2), (vec!["a", ""], 2));
        assert_eq!(fit_rows(&["", ""], 1), (vec![""], 0));
    }
}

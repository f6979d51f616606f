use fuzzy_matcher::{skim::SkimMatcherV2, FuzzyMatcher};

/// Song indices to list in the directory.
///
/// An empty query lists every song in file order; otherwise only fuzzy
/// matches are kept, best score first (ties keep file order).
pub fn filter_titles(titles: &[&str], query: &str) -> Vec<usize> {
    let query = query.trim();
    if query.is_empty() {
        return (0..titles.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut matched: Vec<(i64, usize)> = titles
        .iter()
        .enumerate()
        .filter_map(|(idx, title)| matcher.fuzzy_match(title, query).map(|score| (score, idx)))
        .collect();

    matched.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    matched.into_iter().map(|(_, idx)| idx).collect()
}

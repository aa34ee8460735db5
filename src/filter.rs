use crate::entries::Entry;

/// Case-insensitive substring match on name or file path.
pub fn matches(entry: &Entry, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    matches_lowered(entry, &query.to_lowercase())
}

fn matches_lowered(entry: &Entry, q: &str) -> bool {
    entry.name.to_lowercase().contains(q) || entry.file_path.to_lowercase().contains(q)
}

/// Indices of the entries visible for `query`, in store order.
pub fn filter_entries(entries: &[Entry], query: &str) -> Vec<usize> {
    if query.trim().is_empty() {
        return (0..entries.len()).collect();
    }
    let q = query.to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| matches_lowered(e, &q))
        .map(|(i, _)| i)
        .collect()
}

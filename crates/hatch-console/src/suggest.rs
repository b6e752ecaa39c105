//! Live suggestion filtering and ranking.

/// Compute the suggestion set for an edit buffer.
///
/// Case-insensitive substring matching, ranked by ascending first-match
/// position; ties keep the order of `names`. An empty buffer yields no
/// suggestions, and a candidate equal to the buffer (case-insensitively)
/// suppresses the whole set: once an exact name has been typed there is
/// nothing left to suggest. At most `cap` entries are returned.
pub fn suggestions_for(names: &[String], buffer: &str, cap: usize) -> Vec<String> {
    if buffer.is_empty() {
        return Vec::new();
    }
    let needle = buffer.to_lowercase();
    let mut ranked: Vec<(usize, &String)> = Vec::new();
    for name in names {
        let hay = name.to_lowercase();
        if hay == needle {
            return Vec::new();
        }
        if let Some(pos) = hay.find(&needle) {
            ranked.push((pos, name));
        }
    }
    // Stable sort, so equal match positions keep the source order.
    ranked.sort_by_key(|(pos, _)| *pos);
    ranked
        .into_iter()
        .take(cap)
        .map(|(_, name)| name.clone())
        .collect()
}

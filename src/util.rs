use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Up to two uppercase initials, e.g. `"Dana Whitfield"` -> `"DW"`.
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace().filter_map(|word| word.chars().next());
    let first = words.next();
    let last = words.last();

    first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }

    let mut truncated = text
        .chars()
        .take(max_chars.saturating_sub(1))
        .collect::<String>();
    truncated.push('…');
    truncated
}

/// Stable value in `[0, 1)` derived from an id.
pub fn stable_unit(id: &str) -> f32 {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    let hash = hasher.finish();

    (hash >> 40) as f32 / (1u64 << 24) as f32
}

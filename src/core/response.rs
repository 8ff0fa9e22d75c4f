//! Reply text helpers shared by command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

/// Most list entries a single reply shows
pub const MAX_LIST_ITEMS: usize = 5;

/// Lowercase and trim inbound text before keyword matching
pub fn normalize_command_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// First `MAX_LIST_ITEMS` entries of a resource list
pub fn take_preview<T>(items: &[T]) -> &[T] {
    &items[..items.len().min(MAX_LIST_ITEMS)]
}

/// Join at most `limit` entries with ", "
pub fn join_limited(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

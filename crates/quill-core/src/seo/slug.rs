//! URL-safe slug generation.

/// Generate a URL-friendly slug from a post title.
///
/// Lowercases, keeps ASCII alphanumerics, turns whitespace (and existing
/// separator) runs into a single `-`, drops everything else, and trims
/// leading/trailing separators. Deterministic and total: empty or
/// whitespace-only input yields an empty string, which callers must reject
/// as invalid input rather than treat as a generator failure.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_separator = true;
        }
        // Anything else (punctuation, non-ASCII) is dropped outright.
    }

    slug
}

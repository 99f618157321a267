//! SEO metadata derivation from post title and HTML content.

const META_TITLE_LIMIT: usize = 55;
const META_DESCRIPTION_LIMIT: usize = 155;
const ELLIPSIS: &str = "...";

/// Derived SEO fields. Never edited directly; recomputed whenever the
/// source title or content changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoMeta {
    pub meta_title: String,
    pub meta_description: String,
}

/// Derive both SEO fields from a post's title and HTML content.
/// Pure and total: empty input produces empty output.
pub fn derive_meta(title: &str, content: &str) -> SeoMeta {
    SeoMeta {
        meta_title: meta_title(title),
        meta_description: meta_description(content),
    }
}

/// Meta title: the title itself when it fits, otherwise a 55-character
/// prefix with a trailing ellipsis (at most 58 characters total).
fn meta_title(title: &str) -> String {
    truncate_with_ellipsis(title, META_TITLE_LIMIT)
}

/// Meta description: plain text extracted from the HTML content, capped at
/// 155 characters plus an ellipsis when truncated.
fn meta_description(content: &str) -> String {
    let plain = strip_markup(content);
    truncate_with_ellipsis(&plain, META_DESCRIPTION_LIMIT)
}

/// Reduce HTML to plain text: drop `<...>` tag runs, collapse `&...;`
/// entities to a single space, then collapse all whitespace runs and trim.
fn strip_markup(html: &str) -> String {
    let untagged = strip_tags(html);
    let text = collapse_entities(&untagged);
    collapse_whitespace(&text)
}

fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut chars = html.chars();

    while let Some(ch) = chars.next() {
        if ch == '<' {
            // Skip to the closing '>'; an unterminated tag swallows the rest.
            for c in chars.by_ref() {
                if c == '>' {
                    break;
                }
            }
        } else {
            text.push(ch);
        }
    }

    text
}

fn collapse_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        // An entity runs to the next ';'. Without one, '&' is literal.
        match rest[start + 1..].find(';') {
            Some(offset) => {
                out.push(' ');
                rest = &rest[start + 1 + offset + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to `limit` characters (Unicode scalars, not bytes), trimming
/// trailing whitespace before appending the ellipsis marker.
fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let prefix: String = text.chars().take(limit).collect();
    format!("{}{}", prefix.trim_end(), ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title_unchanged() {
        assert_eq!(meta_title("My First Post"), "My First Post");
    }

    #[test]
    fn test_title_at_limit_unchanged() {
        let title = "a".repeat(55);
        assert_eq!(meta_title(&title), title);
    }

    #[test]
    fn test_long_title_truncated_with_ellipsis() {
        let title = "How to Learn Rust and Actix in 2026: A Complete Beginner's Guide";
        let meta = meta_title(title);
        assert!(meta.ends_with("..."));
        assert!(meta.chars().count() <= 58);
        let prefix = meta.trim_end_matches("...");
        assert!(title.starts_with(prefix));
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let title = "é".repeat(60);
        let meta = meta_title(&title);
        assert_eq!(meta.chars().count(), 58);
    }

    #[test]
    fn test_description_strips_tags() {
        let meta = meta_description("<p>Hello <strong>world</strong></p>");
        assert_eq!(meta, "Hello world");
        assert!(!meta.contains('<') && !meta.contains('>'));
    }

    #[test]
    fn test_description_collapses_entities() {
        assert_eq!(
            meta_description("<p>Fish&nbsp;&amp;&nbsp;chips</p>"),
            "Fish chips"
        );
    }

    #[test]
    fn test_lone_ampersand_kept() {
        assert_eq!(meta_description("salt & pepper"), "salt & pepper");
    }

    #[test]
    fn test_description_collapses_whitespace() {
        assert_eq!(
            meta_description("<div>  lots \n\n of\t space  </div>"),
            "lots of space"
        );
    }

    #[test]
    fn test_long_description_truncated() {
        let content = format!("<p>{}</p>", "word ".repeat(100));
        let meta = meta_description(&content);
        assert!(meta.ends_with("..."));
        assert!(meta.chars().count() <= 158);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let meta = derive_meta("", "");
        assert_eq!(meta.meta_title, "");
        assert_eq!(meta.meta_description, "");
    }

    #[test]
    fn test_scenario_from_api() {
        let meta = derive_meta("My First Post", "<p>Hello</p>");
        assert_eq!(meta.meta_title, "My First Post");
        assert_eq!(meta.meta_description, "Hello");
    }
}

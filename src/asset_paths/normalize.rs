use std::sync::OnceLock;

use regex::Regex;

fn non_search_chars() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("invalid search base regex"))
}

/// Search base derived from a project slug: the slug with every hyphen removed.
///
/// `terraflow-platform` becomes `terraflowplatform`. Nothing else is touched, so slugs
/// keep their original case and any other punctuation.
pub fn slug_search_base(slug: &str) -> String {
    slug.replace('-', "")
}

/// Search base derived from a human readable title.
///
/// The title is lowercased and every character outside `[a-z0-9]` is dropped, which makes
/// the function idempotent.
pub fn title_search_base(title: &str) -> String {
    non_search_chars()
        .replace_all(&title.to_lowercase(), "")
        .into_owned()
}

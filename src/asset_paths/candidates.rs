use std::collections::BTreeSet;

use super::filters::is_safe_identifier;
use super::normalize::{slug_search_base, title_search_base};

/// Generate the ordered search bases for a project.
///
/// A supplied title takes priority over the slug. Bases that normalise to the same string
/// collapse into one entry, and bases that are empty or unsafe to splice into a filename
/// are dropped entirely.
pub fn project_search_bases(slug: &str, title: Option<&str>) -> Vec<String> {
    let mut builder = SearchBaseBuilder::default();

    if let Some(title) = title {
        builder.push(title_search_base(title));
    }
    builder.push(slug_search_base(slug));

    builder.finish()
}

/// Candidate filename for a numbered slot: `{base}{slot}.{extension}`.
pub fn candidate_filename(base: &str, slot: u32, extension: &str) -> String {
    format!("{base}{slot}.{extension}")
}

#[derive(Default)]
struct SearchBaseBuilder {
    seen: BTreeSet<String>,
    result: Vec<String>,
}

impl SearchBaseBuilder {
    fn push(&mut self, base: String) {
        if !is_safe_identifier(&base) {
            tracing::trace!(%base, "skipping unusable search base");
            return;
        }
        if self.seen.insert(base.clone()) {
            self.result.push(base);
        }
    }

    fn finish(self) -> Vec<String> {
        self.result
    }
}

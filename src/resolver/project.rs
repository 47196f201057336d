//! Project lookup: numbered screenshots named after the project's title or slug.

use crate::asset_paths::{make_web_asset_path, project_search_bases};
use crate::layout::{AssetKind, AssetLayout};
use crate::resolver::scan::{ConventionScan, scan_convention};
use crate::source::AssetSource;

/// Highest project slot ever probed.
pub const PROJECT_SLOTS: u32 = 10;

/// Project image extensions in priority order.
pub const PROJECT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Resolve the images for a project.
///
/// The title-derived base is tried before the slug-derived one and the first base with any
/// match is the only one reported. Within a slot `.png` beats `.jpg`, which beats `.jpeg`,
/// which beats `.webp`.
pub fn resolve_project_images<S: AssetSource>(
    source: &S,
    layout: &AssetLayout,
    slug: &str,
    title: Option<&str>,
) -> Vec<String> {
    let scan = ConventionScan {
        bases: project_search_bases(slug, title),
        slots: 1..=PROJECT_SLOTS,
        extensions: PROJECT_EXTENSIONS,
    };

    let images: Vec<String> = scan_convention(source, &layout.directory(AssetKind::Project), &scan)
        .into_iter()
        .map(|filename| make_web_asset_path(layout, AssetKind::Project, &filename))
        .collect();

    if images.is_empty() {
        tracing::debug!(slug, ?title, "no project images found");
    }
    images
}

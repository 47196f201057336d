//! Journey lookup: `{identifier}{n}.jpg` for a handful of slots.

use crate::asset_paths::{is_safe_identifier, make_web_asset_path};
use crate::layout::{AssetKind, AssetLayout};
use crate::resolver::scan::{ConventionScan, scan_convention};
use crate::source::AssetSource;

/// Highest journey slot ever probed.
pub const JOURNEY_SLOTS: u32 = 4;

/// Journey images are always JPEGs.
pub const JOURNEY_EXTENSIONS: &[&str] = &["jpg"];

/// Resolve the journey images for `identifier`, in ascending slot order.
///
/// The identifier is used verbatim. Missing slots are skipped rather than ending the
/// lookup, so `acme1.jpg` and `acme3.jpg` both resolve without an `acme2.jpg`.
pub fn resolve_journey_images<S: AssetSource>(
    source: &S,
    layout: &AssetLayout,
    identifier: &str,
) -> Vec<String> {
    if !is_safe_identifier(identifier) {
        tracing::debug!(identifier, "refusing to probe journey identifier");
        return Vec::new();
    }

    let scan = ConventionScan {
        bases: vec![identifier.to_string()],
        slots: 1..=JOURNEY_SLOTS,
        extensions: JOURNEY_EXTENSIONS,
    };

    scan_convention(source, &layout.directory(AssetKind::Journey), &scan)
        .into_iter()
        .map(|filename| make_web_asset_path(layout, AssetKind::Journey, &filename))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::test_support::{FlakySource, write_files};
    use crate::source::FsAssetSource;
    use tempfile::tempdir;

    #[test]
    fn gaps_do_not_truncate_the_sequence() {
        let temp = tempdir().unwrap();
        let layout = AssetLayout::with_root(temp.path());
        write_files(&layout.directory(AssetKind::Journey), &[
            "acme1.jpg",
            "acme3.jpg",
            "acme4.jpg",
        ]);

        assert_eq!(resolve_journey_images(&FsAssetSource, &layout, "acme"), vec![
            "/journey/acme1.jpg".to_string(),
            "/journey/acme3.jpg".to_string(),
            "/journey/acme4.jpg".to_string(),
        ]);
    }

    #[test]
    fn ignores_slots_past_four_and_other_extensions() {
        let temp = tempdir().unwrap();
        let layout = AssetLayout::with_root(temp.path());
        write_files(&layout.directory(AssetKind::Journey), &[
            "acme2.png",
            "acme4.jpg",
            "acme5.jpg",
        ]);

        assert_eq!(resolve_journey_images(&FsAssetSource, &layout, "acme"), vec![
            "/journey/acme4.jpg".to_string()
        ]);
    }

    #[test]
    fn swallows_probe_errors_per_candidate() {
        let temp = tempdir().unwrap();
        let layout = AssetLayout::with_root(temp.path());
        write_files(&layout.directory(AssetKind::Journey), &["acme1.jpg", "acme2.jpg"]);

        let source = FlakySource::failing_on(&["acme1.jpg"]);
        assert_eq!(resolve_journey_images(&source, &layout, "acme"), vec![
            "/journey/acme2.jpg".to_string()
        ]);
    }

    #[test]
    fn unsafe_identifiers_resolve_to_nothing() {
        let temp = tempdir().unwrap();
        let layout = AssetLayout::with_root(temp.path());
        write_files(&layout.directory(AssetKind::Project), &["secret1.jpg"]);

        assert!(resolve_journey_images(&FsAssetSource, &layout, "../project/secret").is_empty());
        assert!(resolve_journey_images(&FsAssetSource, &layout, "").is_empty());
    }
}

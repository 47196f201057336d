//! Naming-convention image resolution for the portfolio's public directories.
//!
//! Every lookup is a bounded, sequential set of existence checks against an
//! [`AssetSource`]. None of them can fail: unreadable directories and candidates simply
//! contribute nothing, and an empty result is the caller's cue to use a default image.

mod gallery;
mod journey;
mod project;
mod scan;

pub use gallery::list_gallery_images;
pub use journey::{JOURNEY_EXTENSIONS, JOURNEY_SLOTS, resolve_journey_images};
pub use project::{PROJECT_EXTENSIONS, PROJECT_SLOTS, resolve_project_images};
pub use scan::{ConventionScan, scan_convention};

use crate::layout::AssetLayout;
use crate::models::ImageDescriptor;
use crate::source::{AssetSource, FsAssetSource};

/// Resolves gallery, journey and project images beneath one public assets root.
#[derive(Debug, Clone)]
pub struct AssetResolver<S = FsAssetSource> {
    layout: AssetLayout,
    source: S,
}

impl AssetResolver {
    /// Resolver reading the local filesystem.
    pub fn new(layout: AssetLayout) -> Self {
        Self::with_source(layout, FsAssetSource)
    }
}

impl<S: AssetSource> AssetResolver<S> {
    /// Resolver reading through a custom source.
    pub fn with_source(layout: AssetLayout, source: S) -> Self {
        Self { layout, source }
    }

    /// Layout this resolver probes.
    pub fn layout(&self) -> &AssetLayout {
        &self.layout
    }

    /// Gallery images in directory-listing order.
    pub fn gallery_images(&self) -> Vec<ImageDescriptor> {
        list_gallery_images(&self.source, &self.layout)
    }

    /// Gallery images sorted by filename, for callers that need a stable order.
    pub fn gallery_images_sorted(&self) -> Vec<ImageDescriptor> {
        let mut images = self.gallery_images();
        images.sort_by(|a, b| a.filename.cmp(&b.filename));
        images
    }

    /// Journey images for `identifier`.
    pub fn journey_images(&self, identifier: &str) -> Vec<String> {
        resolve_journey_images(&self.source, &self.layout, identifier)
    }

    /// Project images for `slug`, preferring names derived from `title`.
    pub fn project_images(&self, slug: &str, title: Option<&str>) -> Vec<String> {
        resolve_project_images(&self.source, &self.layout, slug, title)
    }
}

/// Return `resolved` unless it is empty, in which case the statically configured
/// `fallback` images are used instead.
pub fn with_fallback<T>(resolved: Vec<T>, fallback: impl IntoIterator<Item = T>) -> Vec<T> {
    if resolved.is_empty() {
        fallback.into_iter().collect()
    } else {
        resolved
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io::{self, ErrorKind};
    use std::path::Path;

    use crate::source::{AssetSource, FsAssetSource};

    /// Filesystem source that fails on chosen filenames, or on every listing.
    pub struct FlakySource {
        failing: BTreeSet<String>,
        fail_listings: bool,
    }

    impl FlakySource {
        pub fn failing_on(names: &[&str]) -> Self {
            Self {
                failing: names.iter().map(|name| name.to_string()).collect(),
                fail_listings: false,
            }
        }

        pub fn failing_listings() -> Self {
            Self {
                failing: BTreeSet::new(),
                fail_listings: true,
            }
        }
    }

    impl AssetSource for FlakySource {
        fn is_file(&self, path: &Path) -> io::Result<bool> {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            if self.failing.contains(&name) {
                return Err(io::Error::new(ErrorKind::PermissionDenied, "probe refused"));
            }
            FsAssetSource.is_file(path)
        }

        fn list_files(&self, dir: &Path) -> io::Result<Vec<String>> {
            if self.fail_listings {
                return Err(io::Error::new(ErrorKind::PermissionDenied, "listing refused"));
            }
            FsAssetSource.list_files(dir)
        }
    }

    pub fn write_files(dir: &Path, names: &[&str]) {
        fs::create_dir_all(dir).unwrap();
        for name in names {
            fs::write(dir.join(name), b"img").unwrap();
        }
    }
}

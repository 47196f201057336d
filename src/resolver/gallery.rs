//! Gallery listing: every image file in the gallery directory.

use crate::asset_paths::{is_gallery_image, make_web_asset_path};
use crate::layout::{AssetKind, AssetLayout};
use crate::models::ImageDescriptor;
use crate::source::AssetSource;

/// List the gallery images in directory-listing order.
///
/// Listing order is whatever the filesystem hands back and is not stable across
/// platforms. A missing directory or a failed listing yields an empty list.
pub fn list_gallery_images<S: AssetSource>(
    source: &S,
    layout: &AssetLayout,
) -> Vec<ImageDescriptor> {
    let dir = layout.directory(AssetKind::Gallery);
    let names = match source.list_files(&dir) {
        Ok(names) => names,
        Err(err) => {
            tracing::debug!(dir = %dir.display(), %err, "gallery directory unreadable");
            return Vec::new();
        }
    };

    names
        .into_iter()
        .filter(|name| is_gallery_image(name))
        .map(|filename| ImageDescriptor {
            src: make_web_asset_path(layout, AssetKind::Gallery, &filename),
            filename,
        })
        .collect()
}

use crate::layout::{AssetKind, AssetLayout};

/// Produce the web-rooted path an image is served from.
///
/// The generated path always uses forward slashes so that it can be handed straight to an
/// `<img src>`, regardless of the native directory separator of the host that found it.
pub fn make_web_asset_path(layout: &AssetLayout, kind: AssetKind, filename: &str) -> String {
    format!(
        "/{}/{}",
        layout.dir_name(kind).trim_matches('/'),
        filename
    )
    .replace('\\', "/")
}

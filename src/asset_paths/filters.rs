use regex::Regex;

fn gallery_image_pattern() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\.(?:jpe?g|png|webp|gif)$").expect("invalid gallery extension regex")
    })
}

/// Determine whether a gallery directory entry should be served as an image.
///
/// The extension check is case-insensitive, so `IMG_0001.JPG` and `c.WEBP` both qualify.
pub fn is_gallery_image(filename: &str) -> bool {
    gallery_image_pattern().is_match(filename)
}

/// Determine whether an identifier is safe to splice into a filename.
///
/// Path separators are rejected outright, as are the empty string and a bare `..`, so a
/// candidate can never leave the probed directory. Dots inside a name (`v1..2`) are fine.
pub fn is_safe_identifier(value: &str) -> bool {
    !value.is_empty() && value != ".." && !value.contains(['/', '\\'])
}

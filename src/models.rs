//! Data structures produced by the resolver and reported by the CLI.

use serde::{Deserialize, Serialize};

/// A gallery image confirmed to exist at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageDescriptor {
  /// Web-rooted path, e.g. `/gallery/beach.webp`.
  pub src: String,
  /// Bare filename as found on disk.
  pub filename: String,
}

/// Which lookup produced a [`ResolutionReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
  /// Gallery directory listing.
  Gallery,
  /// Journey slot lookup.
  Journey,
  /// Project slot lookup.
  Project,
}

/// Images returned by one lookup, in the shape each variant produces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ResolvedImages {
  /// Gallery descriptors.
  Descriptors(Vec<ImageDescriptor>),
  /// Journey or project web paths.
  Paths(Vec<String>),
}

impl ResolvedImages {
  /// Number of images in the result.
  pub fn len(&self) -> usize {
    match self {
      Self::Descriptors(images) => images.len(),
      Self::Paths(paths) => paths.len(),
    }
  }

  /// Returns `true` when nothing was resolved.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Serializable summary of a lookup, printed by the `portfolio-assets` binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionReport {
  /// Lookup that produced the images.
  pub variant: Variant,
  /// Resolved images, or the fallback list when nothing was found.
  pub images: ResolvedImages,
  /// Whether `images` came from the fallback list.
  pub used_fallback: bool,
}

//! Helpers for naming and normalising portfolio image paths.
//!
//! The responsibilities are split into focused submodules so that search-base
//! normalisation, candidate naming, extension filtering and web path construction can be
//! tested independently of any filesystem.

mod candidates;
mod filters;
mod normalize;
mod web;

pub use candidates::{candidate_filename, project_search_bases};
pub use filters::{is_gallery_image, is_safe_identifier};
pub use normalize::{slug_search_base, title_search_base};
pub use web::make_web_asset_path;

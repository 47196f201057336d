#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod models;
pub mod resolver;
pub mod source;

pub use config::ResolverConfig;
pub use error::ConfigError;
pub use layout::{AssetKind, AssetLayout};
pub use models::ImageDescriptor;
pub use resolver::{AssetResolver, with_fallback};
pub use source::{AssetSource, FsAssetSource};

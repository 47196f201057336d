//! Command line interface for inspecting what the resolver finds.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::ResolverConfig;
use crate::layout::AssetLayout;
use crate::models::{ImageDescriptor, ResolutionReport, ResolvedImages, Variant};
use crate::resolver::{AssetResolver, with_fallback};

/// Top-level arguments for the `portfolio-assets` binary.
#[derive(Debug, Parser)]
#[command(
    name = "portfolio-assets",
    version,
    about = "Resolve portfolio images by filename convention",
    long_about = "Probes the gallery, journey and project directories beneath a public assets \
                  root and prints the images it finds as JSON."
)]
pub struct Cli {
    /// Explicit configuration file. Without it `assets.config.json` is discovered in the
    /// current directory, falling back to defaults.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Public assets root, overriding the configured one.
    #[arg(long, global = true, value_name = "DIR")]
    pub public_root: Option<PathBuf>,

    /// Lookup to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Lookups exposed by the CLI.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every image in the gallery directory
    Gallery {
        /// Sort by filename instead of directory-listing order
        #[arg(long)]
        sorted: bool,
        /// Image paths to report when the gallery is empty
        #[arg(long, value_name = "PATH")]
        fallback: Vec<String>,
    },
    /// Resolve `{identifier}{1..4}.jpg` journey images
    Journey {
        /// Journey identifier, used verbatim as the filename prefix
        #[arg(value_name = "IDENTIFIER")]
        identifier: String,
        /// Image paths to report when nothing is found
        #[arg(long, value_name = "PATH")]
        fallback: Vec<String>,
    },
    /// Resolve numbered project images by title and slug
    Project {
        /// Project slug, e.g. `terraflow-platform`
        #[arg(value_name = "SLUG")]
        slug: String,
        /// Human readable title, tried before the slug
        #[arg(long)]
        title: Option<String>,
        /// Image paths to report when nothing is found
        #[arg(long, value_name = "PATH")]
        fallback: Vec<String>,
    },
}

impl Cli {
    /// Build the layout from the configuration and any command line override.
    pub fn layout(&self) -> Result<AssetLayout> {
        let cwd = env::current_dir().context("failed to determine current directory")?;

        let (config, base_dir) = match &self.config {
            Some(path) => {
                let config = ResolverConfig::load(path)
                    .with_context(|| format!("failed to load config {}", path.display()))?;
                let base_dir = path
                    .parent()
                    .filter(|parent| !parent.as_os_str().is_empty())
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| cwd.clone());
                (config, base_dir)
            }
            None => (ResolverConfig::discover(&cwd), cwd.clone()),
        };

        let mut layout = config.to_layout(&base_dir);
        if let Some(root) = &self.public_root {
            layout.public_root = cwd.join(root);
        }
        Ok(layout)
    }
}

/// Run the parsed command and return the report to print.
pub fn run(cli: &Cli) -> Result<ResolutionReport> {
    let resolver = AssetResolver::new(cli.layout()?);
    tracing::debug!(root = %resolver.layout().root().display(), "resolving images");
    Ok(execute(&resolver, &cli.command))
}

/// Execute a command against an existing resolver.
pub fn execute(resolver: &AssetResolver, command: &Commands) -> ResolutionReport {
    match command {
        Commands::Gallery { sorted, fallback } => {
            let images = if *sorted {
                resolver.gallery_images_sorted()
            } else {
                resolver.gallery_images()
            };
            let used_fallback = images.is_empty() && !fallback.is_empty();
            let images = with_fallback(
                images,
                fallback.iter().map(String::as_str).map(descriptor_for),
            );
            ResolutionReport {
                variant: Variant::Gallery,
                images: ResolvedImages::Descriptors(images),
                used_fallback,
            }
        }
        Commands::Journey {
            identifier,
            fallback,
        } => paths_report(
            Variant::Journey,
            resolver.journey_images(identifier),
            fallback,
        ),
        Commands::Project {
            slug,
            title,
            fallback,
        } => paths_report(
            Variant::Project,
            resolver.project_images(slug, title.as_deref()),
            fallback,
        ),
    }
}

fn paths_report(variant: Variant, images: Vec<String>, fallback: &[String]) -> ResolutionReport {
    let used_fallback = images.is_empty() && !fallback.is_empty();
    ResolutionReport {
        variant,
        images: ResolvedImages::Paths(with_fallback(images, fallback.iter().cloned())),
        used_fallback,
    }
}

fn descriptor_for(src: &str) -> ImageDescriptor {
    let filename = src.rsplit('/').next().unwrap_or(src).to_string();
    ImageDescriptor {
        src: src.to_string(),
        filename,
    }
}

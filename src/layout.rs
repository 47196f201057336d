//! Description of the public assets tree the resolver probes.

use std::path::{Path, PathBuf};

/// Which of the fixed public directories an image lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Free-form photo gallery.
    Gallery,
    /// Numbered images attached to a journey/timeline entry.
    Journey,
    /// Numbered screenshots attached to a project.
    Project,
}

/// Filesystem layout of the public assets root.
///
/// The directory names double as the first segment of every web path the resolver emits,
/// so `project_dir_name = "project"` yields paths like `/project/terraflowplatform1.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    /// Directory served at the web root.
    pub public_root: PathBuf,
    /// Gallery directory beneath `public_root`.
    pub gallery_dir_name: String,
    /// Journey directory beneath `public_root`.
    pub journey_dir_name: String,
    /// Project directory beneath `public_root`.
    pub project_dir_name: String,
}

impl AssetLayout {
    /// Standard layout (`gallery/`, `journey/`, `project/`) beneath the given root.
    pub fn with_root(public_root: impl Into<PathBuf>) -> Self {
        Self {
            public_root: public_root.into(),
            gallery_dir_name: "gallery".into(),
            journey_dir_name: "journey".into(),
            project_dir_name: "project".into(),
        }
    }

    /// Directory name for the given kind.
    pub fn dir_name(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::Gallery => &self.gallery_dir_name,
            AssetKind::Journey => &self.journey_dir_name,
            AssetKind::Project => &self.project_dir_name,
        }
    }

    /// On-disk directory for the given kind.
    pub fn directory(&self, kind: AssetKind) -> PathBuf {
        self.public_root.join(self.dir_name(kind))
    }

    /// Public root as a borrowed path.
    pub fn root(&self) -> &Path {
        &self.public_root
    }
}

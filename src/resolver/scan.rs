//! The numbered-filename probing routine shared by the journey and project lookups.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::asset_paths::candidate_filename;
use crate::source::AssetSource;

/// Parameters for a single convention scan.
#[derive(Debug, Clone)]
pub struct ConventionScan<'a> {
    /// Search bases in priority order. The first base yielding any match wins.
    pub bases: Vec<String>,
    /// Numeric suffixes to probe, ascending.
    pub slots: RangeInclusive<u32>,
    /// Extensions in priority order. At most one extension is recorded per slot.
    pub extensions: &'a [&'a str],
}

/// Probe `dir` for `{base}{slot}.{extension}` files and return the matching filenames.
///
/// Probe errors count as "not found" for that candidate alone and never abort the scan.
/// Matches are returned in slot order for the first base that produced any; later bases
/// are not probed once a base has matched.
pub fn scan_convention<S: AssetSource>(
    source: &S,
    dir: &Path,
    scan: &ConventionScan<'_>,
) -> Vec<String> {
    for base in &scan.bases {
        let mut seen = BTreeSet::new();
        let mut found = Vec::new();

        for slot in scan.slots.clone() {
            for extension in scan.extensions {
                let filename = candidate_filename(base, slot, extension);
                if !probe(source, dir, &filename) {
                    continue;
                }
                if seen.insert(filename.clone()) {
                    found.push(filename);
                }
                break;
            }
        }

        if !found.is_empty() {
            return found;
        }
    }

    Vec::new()
}

fn probe<S: AssetSource>(source: &S, dir: &Path, filename: &str) -> bool {
    let path = dir.join(filename);
    match source.is_file(&path) {
        Ok(exists) => {
            tracing::trace!(path = %path.display(), exists, "probed candidate");
            exists
        }
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "treating unreadable candidate as missing");
            false
        }
    }
}

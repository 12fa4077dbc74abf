use ignore::WalkBuilder;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{FinderError, Result};

const ARCHIVE_SUFFIXES: [&str; 4] = [".jar", ".war", ".ear", ".rar"];
const CLASS_SUFFIX: &str = ".class";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    ArchiveFile,
    LooseClassFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub kind: CandidateKind,
}

/// Classifies a file name by suffix, ignoring case.
pub fn candidate_kind(file_name: &str) -> Option<CandidateKind> {
    let lower = file_name.to_lowercase();
    if ARCHIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        Some(CandidateKind::ArchiveFile)
    } else if lower.ends_with(CLASS_SUFFIX) {
        Some(CandidateKind::LooseClassFile)
    } else {
        None
    }
}

/// Walks `root` depth-first and returns every archive and class file in it.
///
/// Entries of a directory are visited in file name order. Symlinked
/// directories are followed; loops and subdirectories that cannot be listed
/// are skipped. Only a root that cannot be listed is an error.
pub fn discover(root: &Path) -> Result<Vec<Candidate>> {
    std::fs::read_dir(root).map_err(|source| FinderError::DirectoryUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut candidates = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping unreadable entry: {err}");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if let Some(kind) = candidate_kind(&name) {
            candidates.push(Candidate {
                path: entry.path().to_path_buf(),
                kind,
            });
        }
    }

    Ok(candidates)
}

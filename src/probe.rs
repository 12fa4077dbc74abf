use memmap2::Mmap;
use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

use crate::error::{FinderError, Result};
use crate::term::NormalizedTerm;

/// An archive whose central directory has been read.
///
/// The mapping is owned by the archive and released when it is dropped.
pub struct OpenArchive {
    path: PathBuf,
    archive: ZipArchive<Cursor<Mmap>>,
}

impl std::fmt::Debug for OpenArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenArchive")
            .field("path", &self.path)
            .field("entries", &self.archive.len())
            .finish()
    }
}

pub fn open_archive(archive_path: &Path) -> Result<OpenArchive> {
    let unreadable = |reason: String| FinderError::ArchiveUnreadable {
        path: archive_path.to_path_buf(),
        reason,
    };

    let file = File::open(archive_path).map_err(|e| unreadable(e.to_string()))?;
    // SAFETY: The file is opened read-only. The mapping stays valid after the
    // file handle is closed and is only read through the archive.
    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| unreadable(e.to_string()))?;
    let archive = ZipArchive::new(Cursor::new(mmap)).map_err(|e| unreadable(e.to_string()))?;

    Ok(OpenArchive {
        path: archive_path.to_path_buf(),
        archive,
    })
}

impl OpenArchive {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entry names matching `term`, in central directory order.
    ///
    /// Names come from the central directory only. No local header is read
    /// and no entry is decompressed.
    pub fn matching_entries(&self, term: &NormalizedTerm) -> Vec<String> {
        (0..self.archive.len())
            .filter_map(|i| self.archive.name_for_index(i))
            .filter(|name| term.matches(name))
            .map(str::to_string)
            .collect()
    }
}

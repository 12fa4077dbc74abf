use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FinderError>;

/// Errors raised while validating a request or reading the tree.
///
/// Only the first four abort a run. `ArchiveUnreadable` is reported per
/// candidate and scanning moves on.
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("{0}")]
    InvalidArguments(String),

    #[error("The directory \"{}\" does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("The file \"{}\" is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Cannot list directory \"{}\": {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read archive \"{}\": {reason}", path.display())]
    ArchiveUnreadable { path: PathBuf, reason: String },
}

use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};
use crate::error::{FinderError, Result};
use crate::term::NormalizedTerm;

/// A validated search, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    root_directory: PathBuf,
    search_term: String,
    case_sensitive: bool,
    verbose: bool,
    format: OutputFormat,
}

impl SearchRequest {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::new(&cli.directory, &cli.class_name, cli.case_sensitive, cli.verbose)
            .map(|req| req.with_format(cli.format))
    }

    /// Validates the root directory and search term.
    ///
    /// The root is made absolute so that loose class files are matched and
    /// reported by their absolute path.
    pub fn new(
        root_directory: &Path,
        search_term: &str,
        case_sensitive: bool,
        verbose: bool,
    ) -> Result<Self> {
        if search_term.trim().is_empty() {
            return Err(FinderError::InvalidArguments(
                "Class name must be specified".to_string(),
            ));
        }
        if root_directory.as_os_str().is_empty() {
            return Err(FinderError::InvalidArguments(
                "Directory name must be specified".to_string(),
            ));
        }

        let root = resolve_root(root_directory)?;

        Ok(Self {
            root_directory: root,
            search_term: search_term.to_string(),
            case_sensitive,
            verbose,
            format: OutputFormat::Text,
        })
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn normalized_term(&self) -> NormalizedTerm {
        NormalizedTerm::new(&self.search_term, self.case_sensitive)
    }
}

fn resolve_root(dir: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf());
    let metadata = std::fs::metadata(&absolute)
        .map_err(|_| FinderError::DirectoryNotFound(dir.to_path_buf()))?;
    if !metadata.is_dir() {
        return Err(FinderError::NotADirectory(dir.to_path_buf()));
    }
    Ok(absolute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "classfinder_config_{}_{}_{}",
            std::process::id(),
            nanos,
            name
        ))
    }

    #[test]
    fn accepts_existing_directory_and_makes_it_absolute() {
        let dir = temp_dir("ok");
        std::fs::create_dir_all(&dir).unwrap();

        let req = SearchRequest::new(&dir, "org.slf4j.Logger", false, true).unwrap();
        assert!(req.root_directory().is_absolute());
        assert_eq!(req.search_term(), "org.slf4j.Logger");
        assert!(req.verbose());
        assert_eq!(req.normalized_term().as_str(), "org/slf4j/logger");

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn relative_root_resolves_against_current_dir() {
        let req = SearchRequest::new(Path::new("."), "Logger", true, false).unwrap();
        assert!(req.root_directory().is_absolute());
        assert_eq!(req.normalized_term().as_str(), "Logger");
    }

    #[test]
    fn rejects_missing_directory() {
        let dir = temp_dir("missing");
        let err = SearchRequest::new(&dir, "Logger", false, false).unwrap_err();
        assert!(matches!(err, FinderError::DirectoryNotFound(_)));
    }

    #[test]
    fn rejects_plain_file_as_root() {
        let dir = temp_dir("file");
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("lib.jar");
        std::fs::write(&file, b"x").unwrap();

        let err = SearchRequest::new(&file, "Logger", false, false).unwrap_err();
        assert!(matches!(err, FinderError::NotADirectory(_)));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn rejects_blank_search_term() {
        let err = SearchRequest::new(Path::new("."), "  ", false, false).unwrap_err();
        assert!(matches!(err, FinderError::InvalidArguments(_)));
    }
}

use serde::Serialize;
use std::collections::VecDeque;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::slice;
use tracing::{info, warn};

use crate::error::FinderError;
use crate::probe;
use crate::scan::{Candidate, CandidateKind};
use crate::term::NormalizedTerm;

/// One occurrence of the search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub candidate_path: PathBuf,
    pub kind: CandidateKind,
    /// Entry name inside the archive; empty for loose class files.
    pub internal_entry_name: String,
    pub search_term: String,
}

impl MatchRecord {
    pub fn is_loose_class_file(&self) -> bool {
        self.kind == CandidateKind::LooseClassFile
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub candidates: usize,
    pub archives_opened: usize,
    pub archives_failed: usize,
    pub matches: usize,
}

/// Receives progress and per-archive failures, kept apart from the match
/// stream.
pub trait ScanObserver {
    fn opening_archive(&mut self, _path: &Path) {}

    fn archive_unreadable(&mut self, _error: &FinderError) {}
}

/// Observer that drops every notice.
#[derive(Debug, Default)]
pub struct Silent;

impl ScanObserver for Silent {}

/// Target of the notices `LogObserver` emits. The binary keeps it enabled
/// whatever `RUST_LOG` says.
pub const NOTICE_TARGET: &str = "classfinder::notice";

/// Sends notices to the tracing subscriber, which writes to stderr.
#[derive(Debug, Default)]
pub struct LogObserver;

impl ScanObserver for LogObserver {
    fn opening_archive(&mut self, path: &Path) {
        info!(target: NOTICE_TARGET, "looking in {}", path.display());
    }

    fn archive_unreadable(&mut self, error: &FinderError) {
        warn!(target: NOTICE_TARGET, "{error}");
    }
}

/// Lazily searches candidates in discovery order.
///
/// Each archive is opened, its matching entries collected and the archive
/// closed before any of its records are yielded. With `verbose`, the notice
/// for an archive is sent once it has opened, just before its entries are
/// enumerated.
pub struct Scan<'a, O: ScanObserver> {
    candidates: slice::Iter<'a, Candidate>,
    term: NormalizedTerm,
    search_term: String,
    verbose: bool,
    observer: O,
    pending: VecDeque<MatchRecord>,
    summary: ScanSummary,
}

pub fn scan<'a, O: ScanObserver>(
    candidates: &'a [Candidate],
    search_term: &str,
    term: NormalizedTerm,
    verbose: bool,
    observer: O,
) -> Scan<'a, O> {
    Scan {
        candidates: candidates.iter(),
        term,
        search_term: search_term.to_string(),
        verbose,
        observer,
        pending: VecDeque::new(),
        summary: ScanSummary::default(),
    }
}

impl<O: ScanObserver> Scan<'_, O> {
    /// Counts so far; final once the iterator is exhausted.
    pub fn summary(&self) -> ScanSummary {
        self.summary
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    fn record(&self, candidate: &Candidate, entry: String) -> MatchRecord {
        MatchRecord {
            candidate_path: candidate.path.clone(),
            kind: candidate.kind,
            internal_entry_name: entry,
            search_term: self.search_term.clone(),
        }
    }

    fn search_candidate(&mut self, candidate: &Candidate) {
        self.summary.candidates += 1;
        match candidate.kind {
            CandidateKind::LooseClassFile => {
                if self.term.matches(&slash_path(&candidate.path)) {
                    let record = self.record(candidate, String::new());
                    self.pending.push_back(record);
                }
            }
            CandidateKind::ArchiveFile => {
                match probe::open_archive(&candidate.path) {
                    Ok(archive) => {
                        self.summary.archives_opened += 1;
                        if self.verbose {
                            self.observer.opening_archive(archive.path());
                        }
                        let entries = archive.matching_entries(&self.term);
                        drop(archive);
                        for entry in entries {
                            let record = self.record(candidate, entry);
                            self.pending.push_back(record);
                        }
                    }
                    Err(err) => {
                        self.summary.archives_failed += 1;
                        self.observer.archive_unreadable(&err);
                    }
                }
            }
        }
    }
}

impl<O: ScanObserver> Iterator for Scan<'_, O> {
    type Item = MatchRecord;

    fn next(&mut self) -> Option<MatchRecord> {
        loop {
            if let Some(record) = self.pending.pop_front() {
                self.summary.matches += 1;
                return Some(record);
            }
            let candidate = self.candidates.next()?;
            self.search_candidate(candidate);
        }
    }
}

fn slash_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(MAIN_SEPARATOR, "/")
    }
}

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::search::{MatchRecord, Scan, ScanObserver, ScanSummary};

pub fn match_line(record: &MatchRecord) -> String {
    if record.is_loose_class_file() {
        format!(
            "\"{}\" found at {}",
            record.search_term,
            record.candidate_path.display()
        )
    } else {
        format!(
            "\"{}\" found in {} as {}",
            record.search_term,
            record.candidate_path.display(),
            record.internal_entry_name
        )
    }
}

pub fn nothing_found_line(search_term: &str) -> String {
    format!("no classes with the string \"{search_term}\" found")
}

#[derive(Debug, Serialize)]
struct JsonMatch {
    path: String,
    entry: Option<String>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    search_term: &'a str,
    root: &'a Path,
    matches: Vec<JsonMatch>,
    summary: ScanSummary,
}

/// Writes every record as the scan yields it, then the "nothing found"
/// notice if the finished scan counted no matches.
pub fn write_text<O, W>(scan: &mut Scan<'_, O>, out: &mut W) -> Result<ScanSummary>
where
    O: ScanObserver,
    W: Write,
{
    for record in scan.by_ref() {
        writeln!(out, "{}", match_line(&record)).context("Failed to write match")?;
    }

    let summary = scan.summary();
    if summary.matches == 0 {
        writeln!(out, "{}", nothing_found_line(scan.search_term()))
            .context("Failed to write report")?;
    }
    out.flush().context("Failed to flush output")?;
    Ok(summary)
}

/// Drains the scan and writes one JSON document.
pub fn write_json<O, W>(scan: &mut Scan<'_, O>, root: &Path, out: &mut W) -> Result<ScanSummary>
where
    O: ScanObserver,
    W: Write,
{
    let matches = scan
        .by_ref()
        .map(|r| JsonMatch {
            path: r.candidate_path.to_string_lossy().into_owned(),
            entry: (!r.is_loose_class_file()).then_some(r.internal_entry_name),
        })
        .collect();
    let summary = scan.summary();

    let report = JsonReport {
        search_term: scan.search_term(),
        root,
        matches,
        summary,
    };
    serde_json::to_writer_pretty(&mut *out, &report).context("Failed to serialize report")?;
    writeln!(out).context("Failed to write report")?;
    out.flush().context("Failed to flush output")?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{Candidate, CandidateKind};
    use crate::search::{Silent, scan};
    use crate::term::NormalizedTerm;
    use std::path::PathBuf;

    fn loose(path: &str) -> Candidate {
        Candidate {
            path: PathBuf::from(path),
            kind: CandidateKind::LooseClassFile,
        }
    }

    #[test]
    fn match_line_distinguishes_archives_and_class_files() {
        let in_jar = MatchRecord {
            candidate_path: PathBuf::from("/lib/slf4j.jar"),
            kind: CandidateKind::ArchiveFile,
            internal_entry_name: "org/slf4j/Logger.class".to_string(),
            search_term: "Logger".to_string(),
        };
        assert_eq!(
            match_line(&in_jar),
            "\"Logger\" found in /lib/slf4j.jar as org/slf4j/Logger.class"
        );

        let loose_file = MatchRecord {
            candidate_path: PathBuf::from("/classes/app/Logger.class"),
            kind: CandidateKind::LooseClassFile,
            internal_entry_name: String::new(),
            search_term: "Logger".to_string(),
        };
        assert_eq!(
            match_line(&loose_file),
            "\"Logger\" found at /classes/app/Logger.class"
        );
    }

    #[test]
    fn text_report_streams_matches() -> Result<()> {
        let candidates = vec![
            loose("/classes/app/Logger.class"),
            loose("/classes/app/Main.class"),
            loose("/classes/lib/LoggerFactory.class"),
        ];
        let mut matches = scan(
            &candidates,
            "Logger",
            NormalizedTerm::new("Logger", false),
            false,
            Silent,
        );

        let mut out = Vec::new();
        let summary = write_text(&mut matches, &mut out)?;

        assert_eq!(summary.matches, 2);
        assert_eq!(
            String::from_utf8(out)?,
            "\"Logger\" found at /classes/app/Logger.class\n\
             \"Logger\" found at /classes/lib/LoggerFactory.class\n"
        );
        Ok(())
    }

    #[test]
    fn empty_scan_prints_nothing_found() -> Result<()> {
        let candidates = vec![loose("/classes/app/Main.class")];
        let mut matches = scan(
            &candidates,
            "com.acme.Missing",
            NormalizedTerm::new("com.acme.Missing", false),
            false,
            Silent,
        );

        let mut out = Vec::new();
        let summary = write_text(&mut matches, &mut out)?;
        assert_eq!(summary.matches, 0);
        assert_eq!(summary.candidates, 1);
        assert_eq!(
            String::from_utf8(out)?,
            "no classes with the string \"com.acme.Missing\" found\n"
        );
        Ok(())
    }

    #[test]
    fn json_report_omits_entry_for_class_files() -> Result<()> {
        let candidates = vec![loose("/classes/Logger.class")];
        let mut matches = scan(
            &candidates,
            "Logger",
            NormalizedTerm::new("Logger", true),
            false,
            Silent,
        );

        let mut out = Vec::new();
        write_json(&mut matches, Path::new("/classes"), &mut out)?;

        let value: serde_json::Value = serde_json::from_slice(&out)?;
        assert_eq!(value["search_term"], "Logger");
        assert_eq!(value["root"], "/classes");
        assert_eq!(value["matches"][0]["path"], "/classes/Logger.class");
        assert!(value["matches"][0]["entry"].is_null());
        assert_eq!(value["summary"]["matches"], 1);
        Ok(())
    }
}

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use classfinder::cli::{Cli, OutputFormat};
use classfinder::config::SearchRequest;
use classfinder::report::{write_json, write_text};
use classfinder::scan::discover;
use classfinder::search::{LogObserver, NOTICE_TARGET, scan};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

fn main() -> Result<ExitCode> {
    init_tracing()?;
    let cli = Cli::parse();

    let request = match SearchRequest::from_cli(&cli) {
        Ok(request) => request,
        Err(err) => {
            let usage = Cli::command().render_usage();
            eprintln!("{usage}");
            eprintln!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    run(&request)?;
    Ok(ExitCode::SUCCESS)
}

/// `RUST_LOG` tunes diagnostics, but scan notices (`-v` progress and
/// unreadable archives) always reach stderr.
fn init_tracing() -> Result<()> {
    let notices: Directive = format!("{NOTICE_TARGET}=info")
        .parse()
        .context("Invalid notice filter directive")?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive(notices);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();
    Ok(())
}

fn run(request: &SearchRequest) -> Result<()> {
    let root = request.root_directory();
    let candidates = discover(root)?;
    debug!("{} candidates under {}", candidates.len(), root.display());

    let mut matches = scan(
        &candidates,
        request.search_term(),
        request.normalized_term(),
        request.verbose(),
        LogObserver,
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = match request.format() {
        OutputFormat::Text => write_text(&mut matches, &mut out)?,
        OutputFormat::Json => write_json(&mut matches, root, &mut out)?,
    };
    out.flush().context("Failed to flush stdout")?;

    debug!(
        "searched {} candidates, {} archives opened, {} unreadable, {} matches",
        summary.candidates, summary.archives_opened, summary.archives_failed, summary.matches
    );
    Ok(())
}

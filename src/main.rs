use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;

use foldertree::cli::Cli;
use foldertree::core::{render, search};
use foldertree::fs::RealFileSystem;
use foldertree::models::WalkStatus;
use foldertree::output::{Printer, should_use_color};
use foldertree::{WalkOptions, walk};

const INTERRUPTED_EXIT_CODE: i32 = 130;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let root = cli.root_path();
    let config = cli.render_config();
    tracing::debug!(root = %root.display(), ?config, "starting walk");

    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel = Arc::clone(&cancel);
        tokio::spawn(async move {
            if watch_interrupts(tokio::signal::ctrl_c, cancel).await {
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
        });
    }
    let options = WalkOptions::default().with_cancel_flag(cancel);

    let fs = RealFileSystem;
    let report = match walk(&fs, &root, &config, &options).await {
        Ok(report) => report,
        Err(err) => {
            eprintln!("foldertree: {err}");
            return ExitCode::from(1);
        }
    };

    let mut printer = Printer::stdout(should_use_color(cli.color));
    let summary = render::render_summary(&report.summary, report.status, &config);
    if let Err(err) = printer
        .write_lines(&report.lines)
        .and_then(|()| printer.write_lines(&summary))
    {
        eprintln!("foldertree: {err}");
        return ExitCode::from(1);
    }

    if let Some(keyword) = cli.search_keyword() {
        if report.status == WalkStatus::Cancelled {
            tracing::warn!(keyword, "walk was cancelled, skipping search");
            return ExitCode::SUCCESS;
        }
        let lines = match search::search(&fs, &root, keyword, &options).await {
            Ok(found) => render::render_search(keyword, &found),
            Err(err) => {
                eprintln!("foldertree: {err:#}");
                return ExitCode::from(1);
            }
        };
        if let Err(err) = printer.write_lines(&lines) {
            eprintln!("foldertree: {err}");
            return ExitCode::from(1);
        }
    }

    ExitCode::SUCCESS
}

/// The first interrupt asks the walk to stop and print what it has.
/// Returns true once a second one arrives, in case the walk is stuck in a
/// blocking read and the process has to exit without it.
async fn watch_interrupts<F, Fut>(mut interrupted: F, cancel: Arc<AtomicBool>) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<()>>,
{
    if interrupted().await.is_err() {
        return false;
    }
    cancel.store(true, Ordering::Relaxed);
    tracing::info!("interrupted, finishing with partial results");
    interrupted().await.is_ok()
}

fn init_logging(verbosity: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("foldertree={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

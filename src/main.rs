//! Command-line entrypoint: replay a sequence of files as revisions.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use linestack::{LineLog, LineLogConfig, Rev};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "linestack",
    about = "Record files as successive revisions and inspect their line history",
    version
)]
struct Cli {
    /// Track revision dependencies (also enabled by LINESTACK_TRACK_DEPS).
    #[arg(long, global = true)]
    track_deps: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the content of one revision.
    Show {
        /// Revision to print. Defaults to the last one.
        #[arg(short, long)]
        rev: Option<Rev>,
        /// Files recorded as revisions 1, 2, ... in order.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print each line of a revision with the revision that introduced it.
    Blame {
        #[arg(short, long)]
        rev: Option<Rev>,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print every line that ever existed with the revisions containing it.
    Flatten {
        /// Emit JSON instead of a text table.
        #[arg(long)]
        json: bool,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print which earlier revisions each revision depends on.
    Deps {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linestack=info,linestack_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = LineLogConfig::from_env();
    config.track_deps |= cli.track_deps;

    match cli.command {
        Commands::Show { rev, files } => {
            let mut log = load_history(&files, config)?;
            let rev = resolve_rev(&log, rev)?;
            print!("{}", log.checkout(rev));
        }
        Commands::Blame { rev, files } => {
            let mut log = load_history(&files, config)?;
            let rev = resolve_rev(&log, rev)?;
            log.checkout(rev);
            for (line_rev, line) in log.annotate() {
                print_line(&format!("{:>4}: ", line_rev), line);
            }
        }
        Commands::Flatten { json, files } => {
            let mut log = load_history(&files, config)?;
            let lines = log.flatten();
            if json {
                println!("{}", serde_json::to_string_pretty(&lines)?);
            } else {
                for line in &lines {
                    let revs: Vec<String> = line.revs.iter().map(Rev::to_string).collect();
                    print_line(&format!("{:<12} | ", revs.join(",")), &line.data);
                }
            }
        }
        Commands::Deps { files } => {
            config.track_deps = true;
            let log = load_history(&files, config)?;
            for (rev, deps) in log.rev_deps() {
                let deps: Vec<String> = deps.iter().map(Rev::to_string).collect();
                println!("{}: {}", rev, deps.join(" "));
            }
        }
    }

    Ok(())
}

/// Record each file as the next revision of a fresh log.
fn load_history(files: &[PathBuf], config: LineLogConfig) -> anyhow::Result<LineLog> {
    let mut log = LineLog::with_config(config);
    for path in files {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let rev = log.record_text(&text);
        tracing::info!("Recorded {} as rev {}", path.display(), rev);
    }
    Ok(log)
}

fn resolve_rev(log: &LineLog, rev: Option<Rev>) -> anyhow::Result<Rev> {
    match rev {
        Some(rev) => Ok(log.ensure_rev(rev)?),
        None => Ok(log.max_rev()),
    }
}

fn print_line(prefix: &str, line: &str) {
    if line.ends_with('\n') {
        print!("{}{}", prefix, line);
    } else {
        println!("{}{}", prefix, line);
    }
}

//! mp3count CLI
//!
//! Counts MPEG-1 Layer III audio frames in one or more files.

use clap::Parser;
use colored::Colorize;
use mp3count::{report, Config, CountResult, FrameCounter, SideInfoLayout};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mp3count")]
#[command(about = "Count audio frames in MP3 files", long_about = None)]
#[command(version)]
struct Cli {
    /// MP3 files to count
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Write a report (.json or .csv) to this path
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Look for the Xing header after 17 bytes of side info in mono frames
    #[arg(long)]
    channel_aware: bool,

    /// Reject files larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_size: Option<u64>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SingleCount {
    frame_count: usize,
}

fn init_logging(cli: &Cli, config: &Config) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        config.log_level.as_str()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> mp3count::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if cli.channel_aware {
        config.side_info = SideInfoLayout::ChannelAware;
    }
    if let Some(limit) = cli.max_size {
        config.max_file_size = limit;
    }

    Ok(config)
}

fn print_results(results: &[CountResult], json: bool) -> serde_json::Result<()> {
    if json {
        let out = match results {
            [single] if !single.is_error() => serde_json::to_string_pretty(&SingleCount {
                frame_count: single.frame_count,
            })?,
            _ => serde_json::to_string_pretty(results)?,
        };
        println!("{}", out);
        return Ok(());
    }

    for r in results {
        match &r.error {
            None => println!("{}: {} frames", r.file, r.frame_count.to_string().bold()),
            Some(e) => eprintln!("{}: {}", r.file, e.red()),
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&cli, &config);
    info!(
        files = cli.files.len(),
        side_info = ?config.side_info,
        max_file_size = config.max_file_size,
        "counting frames"
    );

    let counter = FrameCounter::from_config(&config);
    let results: Vec<CountResult> = cli.files.iter().map(|f| counter.count(f)).collect();

    if let Err(e) = print_results(&results, cli.json) {
        eprintln!("{} {}", "error:".red().bold(), e);
        return ExitCode::FAILURE;
    }

    if let Some(path) = &cli.report {
        if let Err(e) = report::generate(path, &results) {
            eprintln!("{} failed to write report: {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
        info!(path = %path.display(), "report written");
    }

    let failed = results.iter().filter(|r| r.is_error()).count();
    if failed > 0 {
        warn!(failed, "some files could not be counted");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

//! Calculator CLI Application
//!
//! This is the command-line harness for the calculator engine.
//! It uses the calc-engine library and adds:
//! - Line-oriented token input from stdin or a file
//! - Host directives for mode switching and history listing
//! - Text or JSON output after each line
//! - TOML configuration

use anyhow::{Context, Result};
use calc_engine::Mode;
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

mod config;
mod report;
mod session;

use config::{AppConfig, OutputFormat};
use session::Session;

/// Calculator - feed one token per line, read display/history/error back
#[derive(Parser, Debug)]
#[command(name = "calc-cli")]
#[command(about = "Token-driven calculator engine harness", long_about = None)]
#[command(version)]
struct Args {
    /// Read tokens from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Starting mode (overrides the config file)
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Basic,
    Scientific,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Basic => Mode::Basic,
            ModeArg::Scientific => Mode::Scientific,
        }
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Calculator CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using engine library v{}", calc_engine::VERSION);

    let config = build_config(&args)?;
    log::debug!("Effective configuration: {:?}", config);

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {:?}", path))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    run_session(reader, config)
}

/// Merge the config file with command-line overrides
fn build_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    if let Some(mode) = args.mode {
        config.engine.mode = mode.into();
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }

    Ok(config)
}

/// Feed every input line to the calculator until EOF
fn run_session(reader: Box<dyn BufRead>, config: AppConfig) -> Result<()> {
    let mut session = Session::new(config.engine, config.output);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut lines = 0usize;

    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        lines += 1;

        if let Some(record) = session.handle_line(&line)? {
            writeln!(out, "{}", record)?;
            out.flush()?;
        }
    }

    log::info!(
        "EOF after {} lines, {} calculations",
        lines,
        session.calculator().history_log().len()
    );
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::{Builder, Target};
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

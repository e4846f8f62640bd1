use clap::Parser;
use log::{info, warn};
use pegcross::LogLevel;
use pegcross::core::config::{self, PegConfig, ResolvedConfig};
use pegcross::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pegcross", about = "Move a peg around a cross-shaped board")]
struct Args {
    /// Read configuration from this file instead of ~/.pegcross/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

fn init_logging(config: &ResolvedConfig) {
    // The board owns stdout, so logs only ever go to a file
    let Some(path) = &config.log_file else {
        return;
    };

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    // Still on the normal screen here, so stderr is visible
    match File::create(path) {
        Ok(log_file) => {
            let _ = WriteLogger::init(config.log_level.into(), log_config, log_file);
        }
        Err(e) => eprintln!("pegcross: cannot open log file {}: {}", path.display(), e),
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let loaded = config::load_config(args.config.as_deref());
    let resolved = config::resolve(
        loaded.as_ref().unwrap_or(&PegConfig::default()),
        args.log_level,
        args.log_file.as_deref(),
    );

    init_logging(&resolved);

    if let Err(e) = &loaded {
        warn!("{}, falling back to defaults", e);
    }
    for warning in &resolved.warnings {
        warn!("{}", warning);
    }
    info!("pegcross starting up with theme: {:?}", resolved.theme);

    tui::run(&resolved)
}

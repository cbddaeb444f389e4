use clap::Parser;
use kubeclaw_nav::LayoutMode;
use kubeclaw_nav::core::config::{self, NavConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kubeclaw-nav", about = "Scroll-aware site navigation in the terminal")]
struct Args {
    /// Pin the layout instead of following the terminal width
    #[arg(short, long, value_enum)]
    layout: Option<LayoutMode>,

    /// Log verbosity for kubeclaw-nav.log
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,

    /// Config file to read instead of ~/.kubeclaw-nav/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to kubeclaw-nav.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("kubeclaw-nav.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let nav_config = loaded.unwrap_or_else(|e| {
        log::warn!("Config unusable, falling back to defaults: {}", e);
        NavConfig::default()
    });
    let resolved = config::resolve(&nav_config, args.layout);

    log::info!(
        "kubeclaw-nav starting up: layout {:?}, breakpoint {} columns",
        resolved.layout_mode,
        resolved.breakpoint_columns
    );

    kubeclaw_nav::tui::run(resolved)
}

use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use crate::constants::*;
use crate::logging::LogLevel;

/// Rotating image carousels: a hero region and an optional secondary strip.
#[derive(Debug, Parser)]
#[command(name = "carousel", version)]
pub struct Args {
    /// Directory holding the hero slides
    pub hero_dir: PathBuf,

    /// Directory holding the slides of the secondary carousel
    #[arg(long, value_name = "DIR")]
    pub secondary: Option<PathBuf>,

    /// Hero auto-advance interval in milliseconds
    #[arg(long, value_name = "MS", default_value_t = HERO_INTERVAL.as_millis() as u64, value_parser = parse_interval_ms)]
    pub hero_interval_ms: u64,

    /// Secondary auto-advance interval in milliseconds
    #[arg(long, value_name = "MS", default_value_t = SECONDARY_INTERVAL.as_millis() as u64, value_parser = parse_interval_ms)]
    pub secondary_interval_ms: u64,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,

    /// Shuffle slide order once at startup
    #[arg(long)]
    pub shuffle: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    pub fn hero_interval(&self) -> Duration {
        Duration::from_millis(self.hero_interval_ms)
    }

    pub fn secondary_interval(&self) -> Duration {
        Duration::from_millis(self.secondary_interval_ms)
    }
}

fn parse_interval_ms(s: &str) -> Result<u64, String> {
    let ms: u64 = s.parse().map_err(|e| format!("invalid interval '{s}': {e}"))?;
    if ms == 0 {
        return Err("interval must be greater than zero".to_string());
    }
    Ok(ms)
}

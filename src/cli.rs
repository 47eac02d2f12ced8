// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::config::RenderConfig;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Landing-page surface: dense grid, stronger swell
    Hero,
    /// Sign-in panel surface: calmer, fainter
    Panel,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "wavefield")]
#[command(about = "Animated wireframe surface", long_about = None)]
pub struct Cli {
    /// Built-in coefficient preset to animate
    #[arg(long, value_enum, default_value = "hero")]
    pub preset: Preset,

    /// JSON config file replacing the preset entirely
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,
}

impl Cli {
    /// Final render configuration: a config file wins over the preset flag
    pub fn resolve_config(&self) -> Result<RenderConfig> {
        match &self.config {
            Some(path) => RenderConfig::from_path(path),
            None => Ok(match self.preset {
                Preset::Hero => RenderConfig::hero(),
                Preset::Panel => RenderConfig::panel(),
            }),
        }
    }
}

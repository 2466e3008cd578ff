use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use scrollstack_common::Axis;

/// scrollstack: lay out a headless scrolling stack of panels and print the
/// result as JSON.
#[derive(Parser, Debug)]
#[command(name = "scrollstack", version, about)]
pub struct Args {
    /// Number of panels to add before running the script.
    #[arg(short = 'n', long, default_value_t = 8)]
    pub panels: u32,

    /// Main-axis extent of each panel.
    #[arg(long, default_value_t = 120.0)]
    pub size: f64,

    /// Wrap every panel with this uniform inset.
    #[arg(long)]
    pub inset: Option<f64>,

    /// Viewport width.
    #[arg(long, default_value_t = 375.0)]
    pub width: f64,

    /// Viewport height.
    #[arg(long, default_value_t = 667.0)]
    pub height: f64,

    /// Stacking direction; overrides the config file.
    #[arg(long, value_enum)]
    pub axis: Option<AxisArg>,

    /// JSON command script to run after the initial panels are added.
    #[arg(short = 's', long)]
    pub script: Option<PathBuf>,

    /// Panel to scroll to once everything else has run.
    #[arg(long)]
    pub scroll_to: Option<u32>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Write the effective config to the default config location before
    /// running.
    #[arg(long)]
    pub save_config: bool,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    Vertical,
    Horizontal,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Vertical => Axis::Vertical,
            AxisArg::Horizontal => Axis::Horizontal,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

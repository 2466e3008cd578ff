mod cli;
mod report;

use std::collections::BTreeSet;

use scrollstack_common::{Axis, ConfigError, EdgeInsets, PanelId, ScrollStackError, Size};
use scrollstack_config::schema::ScrollStackConfig;
use scrollstack_config::{toml_loader, validation};
use scrollstack_panels::commands::load_script;
use scrollstack_panels::{ControllerOptions, HeadlessHost, Panel, ScrollStackController};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::report::StackReport;

fn load_config(args: &Args) -> Result<ScrollStackConfig, ConfigError> {
    match &args.config {
        Some(path) => {
            let config = toml_loader::load_from_path(path)?;
            validation::validate(&config)?;
            Ok(config)
        }
        None => scrollstack_config::load_config(),
    }
}

fn panel(id: PanelId, args: &Args, config: &ScrollStackConfig) -> Panel {
    let title = format!("Panel {}", id.0);
    match args.axis.map(Into::into).unwrap_or(config.appearance.axis) {
        Axis::Vertical => Panel::with_height(id, title, args.size),
        Axis::Horizontal => Panel::with_width(id, title, args.size),
    }
}

fn run(args: &Args, config: &ScrollStackConfig) -> scrollstack_common::Result<StackReport> {
    let mut options = ControllerOptions::from_config(config)?;
    if let Some(axis) = args.axis {
        options.appearance.axis = axis.into();
    }

    let host = HeadlessHost::new(Size::new(args.width, args.height));
    let mut controller = ScrollStackController::with_options(host, options);
    tracing::info!(stack = %controller.id().short(), "stack created");

    let insets = args.inset.map(EdgeInsets::uniform);
    for id in 1..=args.panels {
        let id = PanelId(id);
        controller.host_mut().register(&panel(id, args, config));
        controller.add(id, insets);
    }

    if let Some(path) = &args.script {
        let commands = load_script(path)?;
        let known: BTreeSet<PanelId> = (1..=args.panels).map(PanelId).collect();
        for cmd in &commands {
            if !known.contains(&cmd.panel()) {
                controller.host_mut().register(&panel(cmd.panel(), args, config));
            }
        }
        let applied = controller.execute_all(commands.iter().cloned());
        tracing::info!(path = %path.display(), total = commands.len(), applied, "script finished");
    }

    if let Some(target) = args.scroll_to {
        controller.scroll_to(PanelId(target), None);
    }

    let rounds = controller.settle();
    tracing::debug!(rounds, "stack settled");
    if let Some(panel) = controller.pending_scroll() {
        tracing::warn!(%panel, "scroll target could not be reached");
    }

    Ok(StackReport::capture(&controller))
}

fn main() {
    let args = cli::parse();

    // Config is read before logging is up; load errors are reported below.
    let loaded = load_config(&args);
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config_level.as_directive().to_owned());
    let directive = log_directive
        .parse()
        .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    tracing::info!("scrollstack v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ScrollStackConfig::default()
    });

    if args.print_config {
        println!("{}", scrollstack_config::config_to_json(&config));
        return;
    }
    if args.save_config {
        match scrollstack_config::save_config(&config) {
            Ok(path) => tracing::info!(path = %path.display(), "config written"),
            Err(e) => tracing::warn!("Failed to save config: {e}"),
        }
    }

    let report = match run(&args, &config) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!("{}", ScrollStackError::Serialization(e.to_string()));
            std::process::exit(1);
        }
    }
}

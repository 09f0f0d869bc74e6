use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use clap::Parser;
use eframe::egui;

use crate::config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::ui::{theme::ThemePreset, RosterApp};

#[derive(Parser, Debug)]
#[command(
    name = "roster_gui",
    about = "Keep an in-memory roster of teams and their members"
)]
struct Args {
    /// TOML settings file; defaults to ./roster.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    log_filter: Option<String>,
    #[arg(long, value_enum)]
    theme: Option<ThemePreset>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut settings, notes) = config::load_settings(args.config.as_deref())?;
    if let Some(filter) = args.log_filter {
        settings.log_filter = filter;
    }
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();
    for note in &notes {
        tracing::warn!("{note}");
    }
    tracing::info!(theme = ?settings.theme, "starting roster window");

    let title = settings.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(RosterApp::new(&settings)))),
    )
    .map_err(|err| anyhow::anyhow!("roster window failed: {err}"))
}

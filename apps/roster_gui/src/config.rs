use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

use crate::ui::theme::ThemePreset;

pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub log_filter: String,
    pub theme: ThemePreset,
    pub action_queue_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Team Roster".into(),
            window_width: 960.0,
            window_height: 720.0,
            log_filter: "info".into(),
            theme: ThemePreset::Dark,
            action_queue_capacity: 64,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    window_title: Option<String>,
    window_width: Option<f32>,
    window_height: Option<f32>,
    log_filter: Option<String>,
    theme: Option<ThemePreset>,
    action_queue_capacity: Option<usize>,
}

/// Defaults, then the TOML file, then `ROSTER__*` environment variables.
///
/// Without an explicit path a missing `roster.toml` is not an error. Tracing is
/// not initialised yet while this runs, so skipped values are returned as
/// notes for the caller to log.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<(Settings, Vec<String>)> {
    let mut settings = Settings::default();
    let mut notes = Vec::new();

    match explicit_path {
        Some(path) => {
            let file_cfg = read_file_settings(path)?;
            apply_file_settings(&mut settings, file_cfg);
        }
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if path.exists() {
                match read_file_settings(&path) {
                    Ok(file_cfg) => apply_file_settings(&mut settings, file_cfg),
                    Err(err) => notes.push(format!("ignoring {DEFAULT_CONFIG_FILE}: {err:#}")),
                }
            }
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok(), &mut notes);
    Ok((clamp(settings), notes))
}

fn read_file_settings(path: &Path) -> anyhow::Result<FileSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    toml::from_str::<FileSettings>(&raw)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.window_title {
        settings.window_title = v;
    }
    if let Some(v) = file_cfg.window_width {
        settings.window_width = v;
    }
    if let Some(v) = file_cfg.window_height {
        settings.window_height = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    if let Some(v) = file_cfg.theme {
        settings.theme = v;
    }
    if let Some(v) = file_cfg.action_queue_capacity {
        settings.action_queue_capacity = v;
    }
}

fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
    notes: &mut Vec<String>,
) {
    if let Some(v) = lookup("ROSTER__WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Some(v) = lookup("ROSTER__LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("ROSTER__THEME") {
        match ThemePreset::parse(&v) {
            Some(theme) => settings.theme = theme,
            None => notes.push(format!("ignoring ROSTER__THEME={v:?}: expected dark or light")),
        }
    }
    if let Some(v) = lookup("ROSTER__ACTION_QUEUE_CAPACITY") {
        match v.trim().parse::<usize>() {
            Ok(parsed) => settings.action_queue_capacity = parsed,
            Err(err) => {
                notes.push(format!("ignoring ROSTER__ACTION_QUEUE_CAPACITY={v:?}: {err}"));
            }
        }
    }
}

fn clamp(mut settings: Settings) -> Settings {
    settings.window_width = settings.window_width.max(MIN_WINDOW_WIDTH);
    settings.window_height = settings.window_height.max(MIN_WINDOW_HEIGHT);
    settings.action_queue_capacity = settings.action_queue_capacity.max(1);
    if settings.log_filter.trim().is_empty() {
        settings.log_filter = Settings::default().log_filter;
    }
    settings
}

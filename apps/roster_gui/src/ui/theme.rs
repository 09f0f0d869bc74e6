//! Visual presets: a dark striped-table look (default) and a light one.

use eframe::egui;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Dark,
    Light,
}

impl ThemePreset {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn palette(self) -> RosterPalette {
        match self {
            ThemePreset::Dark => RosterPalette {
                panel_background: egui::Color32::from_rgb(33, 37, 41),
                table_background: egui::Color32::from_rgb(44, 48, 52),
                stripe: egui::Color32::from_rgb(52, 58, 64),
                text: egui::Color32::from_rgb(222, 226, 230),
                accent: egui::Color32::from_rgb(13, 110, 253),
                on_accent: egui::Color32::WHITE,
            },
            ThemePreset::Light => RosterPalette {
                panel_background: egui::Color32::from_rgb(248, 249, 250),
                table_background: egui::Color32::WHITE,
                stripe: egui::Color32::from_rgb(242, 242, 242),
                text: egui::Color32::from_rgb(33, 37, 41),
                accent: egui::Color32::from_rgb(13, 110, 253),
                on_accent: egui::Color32::WHITE,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosterPalette {
    pub panel_background: egui::Color32,
    pub table_background: egui::Color32,
    pub stripe: egui::Color32,
    pub text: egui::Color32,
    pub accent: egui::Color32,
    pub on_accent: egui::Color32,
}

pub fn visuals_for_theme(preset: ThemePreset) -> egui::Visuals {
    let palette = preset.palette();
    let mut visuals = match preset {
        ThemePreset::Dark => egui::Visuals::dark(),
        ThemePreset::Light => egui::Visuals::light(),
    };

    visuals.override_text_color = Some(palette.text);
    visuals.panel_fill = palette.panel_background;
    visuals.window_fill = palette.panel_background;
    visuals.extreme_bg_color = palette.table_background;
    // Grid::striped paints odd rows with faint_bg_color.
    visuals.faint_bg_color = palette.stripe;
    visuals.selection.bg_fill = palette.accent;
    visuals.hyperlink_color = palette.accent;
    visuals.widgets.active.bg_fill = palette.accent;
    visuals.widgets.hovered.bg_fill = palette.accent.gamma_multiply(0.85);
    visuals
}

//! UI layer: app shell, roster widgets, and visual presets.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::RosterApp;

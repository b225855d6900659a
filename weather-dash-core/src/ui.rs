//! The display surface driven by the fetcher, renderer and theme manager.

use crate::{
    theme::{ThemeControl, ThemePreference},
    view::DashboardView,
};

/// A dashboard surface with a results panel, an error panel, a loading
/// indicator and a theme toggle.
///
/// All calls happen from the single task driving the dashboard.
pub trait WeatherUi {
    fn show_loading(&mut self);
    fn hide_loading(&mut self);

    /// Write every slot of `view` and reveal the results panel.
    fn show_results(&mut self, view: &DashboardView);
    fn hide_results(&mut self);

    fn show_error(&mut self, message: &str);
    fn hide_error(&mut self);

    /// Switch the visual mode and refresh the toggle's icon and label.
    fn apply_theme(&mut self, theme: ThemePreference, control: &ThemeControl);
}

/// Visibility of the dashboard panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Panels {
    pub loading: bool,
    pub results: bool,
    pub error: bool,
}

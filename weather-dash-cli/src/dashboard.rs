//! Terminal rendition of the dashboard.

use owo_colors::OwoColorize;
use std::io::Write;
use weather_dash_core::{
    DashboardView, Panels, ThemeControl, ThemePreference, WeatherUi, presenter::Rgb,
};

const BAR_WIDTH: usize = 24;
const MAX_AQI_LEVEL: usize = 6;

/// Foreground colors of a visual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    text: Rgb,
    muted: Rgb,
    accent: Rgb,
    error: Rgb,
}

impl Palette {
    fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Dark => Palette {
                text: Rgb(229, 231, 235),
                muted: Rgb(156, 163, 175),
                accent: Rgb(96, 165, 250),
                error: Rgb(248, 113, 113),
            },
            ThemePreference::Light => Palette {
                text: Rgb(31, 41, 55),
                muted: Rgb(75, 85, 99),
                accent: Rgb(37, 99, 235),
                error: Rgb(185, 28, 28),
            },
        }
    }
}

/// Writes the dashboard panels to a terminal (or any writer).
pub struct TerminalDashboard<W: Write> {
    out: W,
    color: bool,
    palette: Palette,
    panels: Panels,
    theme_line: bool,
}

impl<W: Write> TerminalDashboard<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            palette: Palette::for_theme(ThemePreference::default()),
            panels: Panels::default(),
            theme_line: true,
        }
    }

    /// Apply themes to the palette without printing the toggle line.
    pub fn without_theme_line(mut self) -> Self {
        self.theme_line = false;
        self
    }

    #[cfg(test)]
    pub fn panels(&self) -> Panels {
        self.panels
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Rgb) -> String {
        if self.color {
            text.truecolor(color.0, color.1, color.2).to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_bold(&self, text: &str, color: Rgb) -> String {
        if self.color {
            text.truecolor(color.0, color.1, color.2).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn emit(&mut self, block: &str) {
        if let Err(err) = writeln!(self.out, "{block}").and_then(|()| self.out.flush()) {
            tracing::warn!(error = %err, "Failed to write to terminal");
        }
    }

    fn aqi_bar(&self, view: &DashboardView) -> String {
        let filled = usize::from(view.aqi_level).min(MAX_AQI_LEVEL) * BAR_WIDTH / MAX_AQI_LEVEL;
        let bar = "█".repeat(filled);
        let rest = "░".repeat(BAR_WIDTH - filled);

        format!("{}{}", self.paint(&bar, view.aqi_bar_color), self.paint(&rest, self.palette.muted))
    }

    fn metric(&self, label: &str, value: &str) -> String {
        format!(
            "  {}{}",
            self.paint(&format!("{label:<12}"), self.palette.muted),
            self.paint(value, self.palette.text)
        )
    }

    fn results_block(&self, view: &DashboardView) -> String {
        let p = self.palette;
        let mut lines = vec![
            String::new(),
            format!(
                "{} {}",
                self.paint_bold(&view.location_name, p.accent),
                self.paint(&view.location_country, p.muted)
            ),
            self.paint(&view.local_time, p.muted),
            String::new(),
            format!(
                "{} {}",
                self.paint_bold(&format!("{}°C", view.temp_c), p.text),
                self.paint(&view.feels_like, p.muted)
            ),
            format!(
                "{} {}",
                self.paint(&view.condition_text, p.text),
                self.paint(&view.condition_icon_url, p.muted)
            ),
            String::new(),
            format!(
                "{} {} {}",
                self.paint("Air quality", p.muted),
                self.paint_bold(&view.aqi_value, view.aqi_color),
                self.paint(&view.aqi_status, view.aqi_color)
            ),
            self.aqi_bar(view),
            String::new(),
        ];

        lines.push(self.metric("Humidity", &view.humidity));
        lines.push(self.metric("Wind", &format!("{} {}", view.wind_kph, view.wind_dir)));
        lines.push(self.metric("Pressure", &view.pressure_mb));
        lines.push(self.metric("Visibility", &view.vis_km));
        lines.push(self.metric("Dew point", &view.dewpoint_c));
        lines.push(format!(
            "{} {}",
            self.metric("UV index", &view.uv_index),
            self.paint(&view.uv_status, view.uv_color)
        ));

        lines.join("\n")
    }
}

impl<W: Write> WeatherUi for TerminalDashboard<W> {
    fn show_loading(&mut self) {
        // Retries re-enter loading; only announce the first time.
        if !self.panels.loading {
            self.panels.loading = true;
            let line = self.paint("Loading weather data...", self.palette.muted);
            self.emit(&line);
        }
    }

    fn hide_loading(&mut self) {
        self.panels.loading = false;
    }

    fn show_results(&mut self, view: &DashboardView) {
        self.panels.error = false;
        self.panels.results = true;
        let block = self.results_block(view);
        self.emit(&block);
    }

    fn hide_results(&mut self) {
        self.panels.results = false;
    }

    fn show_error(&mut self, message: &str) {
        self.panels.results = false;
        self.panels.error = true;
        let line = self.paint_bold(message, self.palette.error);
        self.emit(&line);
    }

    fn hide_error(&mut self) {
        self.panels.error = false;
    }

    fn apply_theme(&mut self, theme: ThemePreference, control: &ThemeControl) {
        self.palette = Palette::for_theme(theme);
        if !self.theme_line {
            return;
        }

        let line = format!(
            "{} {}",
            self.paint(&format!("Theme: {theme}"), self.palette.muted),
            self.paint(&format!("[{} {}]", control.icon, control.label), self.palette.accent)
        );
        self.emit(&line);
    }
}

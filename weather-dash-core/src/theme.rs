//! Persisted light/dark preference.

use std::fmt;

use crate::{store::PreferenceStore, ui::WeatherUi};

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Anything other than "light" means dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| Self::try_from(v).ok()).unwrap_or_default()
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ThemePreference {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            _ => Err(anyhow::anyhow!("Unknown theme '{value}'. Supported themes: light, dark.")),
        }
    }
}

/// Icon and label of the toggle; both describe the mode a click switches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeControl {
    pub icon: &'static str,
    pub label: &'static str,
}

impl ThemeControl {
    pub fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Light => ThemeControl { icon: "☾", label: "Dark Mode" },
            ThemePreference::Dark => ThemeControl { icon: "☀", label: "Light Mode" },
        }
    }
}

/// Reads, applies and flips the persisted theme.
#[derive(Debug)]
pub struct ThemeManager<P> {
    store: P,
    current: ThemePreference,
}

impl<P: PreferenceStore> ThemeManager<P> {
    pub fn new(store: P) -> Self {
        Self { store, current: ThemePreference::default() }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Apply the stored preference, defaulting to dark.
    pub fn load_theme<U: WeatherUi + ?Sized>(&mut self, ui: &mut U) -> ThemePreference {
        let stored = match self.store.get_item(THEME_KEY) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "Theme preference unreadable, using default");
                None
            }
        };

        self.current = ThemePreference::from_stored(stored.as_deref());
        self.apply(ui);
        self.current
    }

    /// Flip the mode, persist it and apply it.
    pub fn toggle_theme<U: WeatherUi + ?Sized>(&mut self, ui: &mut U) -> ThemePreference {
        self.current = self.current.toggled();

        if let Err(err) = self.store.set_item(THEME_KEY, self.current.as_str()) {
            tracing::warn!(
                theme = %self.current,
                error = %format!("{err:#}"),
                "Failed to persist theme preference"
            );
        }

        self.apply(ui);
        self.current
    }

    fn apply<U: WeatherUi + ?Sized>(&self, ui: &mut U) {
        tracing::debug!(theme = %self.current, "Applying theme");
        ui.apply_theme(self.current, &ThemeControl::for_theme(self.current));
    }
}

//! Core library for the `weather-dash` dashboard.
//!
//! This crate defines:
//! - The current-weather reading and its WeatherAPI.com decoding
//! - UV / air-quality classification and local-time formatting
//! - The dashboard view model and the [`WeatherUi`] surface it is written to
//! - The fetcher with bounded exponential backoff
//! - The persisted light/dark theme and configuration
//!
//! It is used by `weather-dash-cli`, but any other front-end can implement
//! [`WeatherUi`] and drive the same [`Controller`].

pub mod config;
pub mod controller;
pub mod fetch;
pub mod format;
pub mod model;
mod paths;
pub mod presenter;
pub mod store;
pub mod theme;
pub mod ui;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use config::Config;
pub use controller::{Action, Controller, Outcome};
pub use fetch::{FetchError, Fetcher, RetryPolicy, WeatherApiSource, WeatherSource};
pub use model::WeatherReading;
pub use store::{FileStore, PreferenceStore};
pub use theme::{ThemeControl, ThemeManager, ThemePreference};
pub use ui::{Panels, WeatherUi};
pub use view::DashboardView;

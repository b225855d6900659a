//! In-memory fakes shared by the unit tests.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
    time::Duration,
};

use crate::{
    fetch::{RawResponse, Sleeper, WeatherSource},
    store::PreferenceStore,
    theme::{ThemeControl, ThemePreference},
    ui::{Panels, WeatherUi},
    view::DashboardView,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ShowLoading,
    HideLoading,
    ShowResults,
    HideResults,
    ShowError,
    HideError,
    ApplyTheme(ThemePreference),
}

#[derive(Debug, Default)]
pub struct RecordingUi {
    pub panels: Panels,
    pub view: Option<DashboardView>,
    pub error_text: Option<String>,
    pub theme: Option<ThemePreference>,
    pub control: Option<ThemeControl>,
    pub events: Vec<UiEvent>,
}

impl WeatherUi for RecordingUi {
    fn show_loading(&mut self) {
        self.panels.loading = true;
        self.events.push(UiEvent::ShowLoading);
    }

    fn hide_loading(&mut self) {
        self.panels.loading = false;
        self.events.push(UiEvent::HideLoading);
    }

    fn show_results(&mut self, view: &DashboardView) {
        assert!(!self.panels.error, "results shown while error panel visible");
        self.panels.results = true;
        self.view = Some(view.clone());
        self.events.push(UiEvent::ShowResults);
    }

    fn hide_results(&mut self) {
        self.panels.results = false;
        self.events.push(UiEvent::HideResults);
    }

    fn show_error(&mut self, message: &str) {
        assert!(!self.panels.results, "error shown while results panel visible");
        self.panels.error = true;
        self.error_text = Some(message.to_string());
        self.events.push(UiEvent::ShowError);
    }

    fn hide_error(&mut self) {
        self.panels.error = false;
        self.events.push(UiEvent::HideError);
    }

    fn apply_theme(&mut self, theme: ThemePreference, control: &ThemeControl) {
        self.theme = Some(theme);
        self.control = Some(*control);
        self.events.push(UiEvent::ApplyTheme(theme));
    }
}

/// Replays canned responses in order and records every requested city.
#[derive(Debug)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<RawResponse>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new(responses: Vec<Result<RawResponse>>) -> Self {
        Self { responses: Mutex::new(responses.into()), calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl WeatherSource for ScriptedSource {
    async fn current(&self, city: &str) -> Result<RawResponse> {
        self.calls.lock().expect("calls lock").push(city.to_string());
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or_else(|| Err(anyhow!("no scripted response left")))
    }
}

/// Records requested delays and returns immediately.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().expect("delays lock").clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().expect("delays lock").push(duration);
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.items.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage that is never available.
#[derive(Debug, Default)]
pub struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>> {
        Err(anyhow!("storage unavailable"))
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(anyhow!("quota exceeded"))
    }
}

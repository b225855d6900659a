//! Routes user actions to the fetcher and the theme manager.

use crate::{
    fetch::{Fetcher, FetchError, Sleeper, WeatherSource},
    model::WeatherReading,
    store::PreferenceStore,
    theme::{ThemeManager, ThemePreference},
    ui::WeatherUi,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Search button or Enter in the city input.
    Search(String),
    ToggleTheme,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Rendered(Box<WeatherReading>),
    Failed(FetchError),
    Themed(ThemePreference),
}

/// Owns the dashboard surface and everything that writes to it.
///
/// Searches run one after another; a new search doesn't cancel an earlier one.
#[derive(Debug)]
pub struct Controller<S, W, P, U> {
    fetcher: Fetcher<S, W>,
    themes: ThemeManager<P>,
    ui: U,
}

impl<S, W, P, U> Controller<S, W, P, U>
where
    S: WeatherSource,
    W: Sleeper,
    P: PreferenceStore,
    U: WeatherUi,
{
    pub fn new(fetcher: Fetcher<S, W>, themes: ThemeManager<P>, ui: U) -> Self {
        Self { fetcher, themes, ui }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn theme(&self) -> ThemePreference {
        self.themes.current()
    }

    /// Apply the stored theme, then load `initial_city` if there is one.
    pub async fn on_load(&mut self, initial_city: Option<&str>) -> Option<Outcome> {
        self.themes.load_theme(&mut self.ui);

        match initial_city {
            Some(city) => Some(self.handle(Action::Search(city.to_string())).await),
            None => None,
        }
    }

    pub async fn handle(&mut self, action: Action) -> Outcome {
        match action {
            Action::Search(city) => match self.fetcher.fetch(city.trim(), &mut self.ui).await {
                Ok(reading) => Outcome::Rendered(Box::new(reading)),
                Err(err) => Outcome::Failed(err),
            },
            Action::ToggleTheme => Outcome::Themed(self.themes.toggle_theme(&mut self.ui)),
        }
    }
}

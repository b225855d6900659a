//! Interactive dashboard: one prompt line per search.

use anyhow::Result;
use inquire::{InquireError, Text};
use weather_dash_core::{
    Action, Controller, PreferenceStore, WeatherSource, WeatherUi, fetch::Sleeper,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Action(Action),
    Quit,
}

/// `:theme` toggles, `:quit` leaves, anything else is a city.
pub fn parse_input(line: &str) -> Input {
    match line.trim() {
        ":theme" | ":t" => Input::Action(Action::ToggleTheme),
        ":quit" | ":q" | ":exit" => Input::Quit,
        city => Input::Action(Action::Search(city.to_string())),
    }
}

pub async fn run<S, W, P, U>(
    controller: &mut Controller<S, W, P, U>,
    initial_city: Option<&str>,
) -> Result<()>
where
    S: WeatherSource,
    W: Sleeper,
    P: PreferenceStore,
    U: WeatherUi,
{
    controller.on_load(initial_city).await;

    loop {
        let line = match Text::new("City:")
            .with_help_message("Enter to search, :theme to switch light/dark, :quit to leave")
            .prompt()
        {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        match parse_input(&line) {
            Input::Quit => break,
            Input::Action(action) => {
                tracing::debug!(?action, "Dispatching");
                controller.handle(action).await;
            }
        }
    }

    Ok(())
}

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use is_terminal::IsTerminal;
use std::{
    io::{self, Stdout},
    process::ExitCode,
};
use weather_dash_core::{
    Action, Config, Controller, Fetcher, FileStore, Outcome, ThemeManager, WeatherApiSource,
    fetch::TokioSleeper,
};

use crate::{dashboard::TerminalDashboard, session};

type TerminalController =
    Controller<WeatherApiSource, TokioSleeper, FileStore, TerminalDashboard<Stdout>>;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dash", version, about = "Current weather dashboard")]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the API key and the default city.
    Configure,

    /// Show current weather for a city once.
    Show {
        /// City name, e.g. "London" or "São Paulo".
        city: String,
    },

    /// Interactive dashboard; each entered line is a search.
    Dash {
        /// City loaded on start; defaults to the configured city.
        #[arg(long)]
        city: Option<String>,
    },

    /// Show or switch the light/dark theme.
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommand>,
    },
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ThemeCommand {
    /// Print the stored theme.
    Show,
    /// Switch between light and dark and remember the choice.
    Toggle,
}

impl Cli {
    pub async fn run(self) -> Result<ExitCode> {
        let color = !self.no_color && io::stdout().is_terminal();

        match self.command {
            Command::Configure => {
                configure()?;
            }
            Command::Show { city } => {
                let dashboard = TerminalDashboard::new(io::stdout(), color).without_theme_line();
                let mut controller = terminal_controller(&Config::load()?, dashboard)?;
                controller.on_load(None).await;

                if let Outcome::Failed(_) = controller.handle(Action::Search(city)).await {
                    return Ok(ExitCode::FAILURE);
                }
            }
            Command::Dash { city } => {
                let config = Config::load()?;
                let initial = city.as_deref().or(config.default_city());
                let dashboard = TerminalDashboard::new(io::stdout(), color);
                let mut controller = terminal_controller(&config, dashboard)?;

                session::run(&mut controller, initial).await?;
            }
            Command::Theme { action } => {
                let mut themes = ThemeManager::new(FileStore::open_default()?);

                match action.unwrap_or(ThemeCommand::Show) {
                    ThemeCommand::Show => {
                        themes.load_theme(&mut TerminalDashboard::new(io::stdout(), color));
                    }
                    ThemeCommand::Toggle => {
                        themes.load_theme(&mut TerminalDashboard::new(io::sink(), false));
                        themes.toggle_theme(&mut TerminalDashboard::new(io::stdout(), color));
                    }
                }
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

fn terminal_controller(
    config: &Config,
    dashboard: TerminalDashboard<Stdout>,
) -> Result<TerminalController> {
    let source = WeatherApiSource::new(config.api_key().to_owned(), config.base_url().to_owned());
    let store = FileStore::open_default()?;
    tracing::debug!(preferences = %store.path().display(), "Using preference store");

    Ok(Controller::new(
        Fetcher::new(source),
        ThemeManager::new(store),
        dashboard,
    ))
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Leave empty to use the bundled key")
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key);

    let city = Text::new("Default city:")
        .with_initial_value(config.default_city().unwrap_or_default())
        .with_help_message("Loaded when `weather-dash dash` starts; leave empty for none")
        .prompt()
        .context("Failed to read default city")?;
    config.set_default_city(city);

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_show_with_global_flags() {
        let cli = Cli::try_parse_from(["weather-dash", "show", "São Paulo", "-vv", "--no-color"])
            .expect("valid args");

        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Show { city } if city == "São Paulo"));
    }

    #[test]
    fn theme_action_is_optional() {
        let cli = Cli::try_parse_from(["weather-dash", "theme"]).expect("valid args");
        assert!(matches!(cli.command, Command::Theme { action: None }));

        let cli = Cli::try_parse_from(["weather-dash", "theme", "toggle"]).expect("valid args");
        assert!(matches!(cli.command, Command::Theme { action: Some(ThemeCommand::Toggle) }));
    }

    #[test]
    fn dash_city_flag() {
        let cli = Cli::try_parse_from(["weather-dash", "dash", "--city", "Oslo"]).expect("valid args");
        assert!(matches!(cli.command, Command::Dash { city: Some(c) } if c == "Oslo"));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["weather-dash"]).is_err());
    }
}

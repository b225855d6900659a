//! Current-weather fetch with bounded exponential backoff.
//!
//! One call to [`Fetcher::fetch`] is one invocation chain: it owns its
//! [`RetryState`], walks the [`FetchState`] machine until Success or Failed,
//! and leaves the UI showing exactly one of the results or error panel.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::{fmt::Debug, time::Duration};

use crate::{
    model::{WeatherReading, provider_error_message},
    ui::WeatherUi,
    view::render,
};

/// WeatherAPI.com current-conditions endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1/current.json";

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Where current conditions come from.
///
/// An `Err` means the request never completed (DNS, TLS, connection reset...).
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<RawResponse>;
}

/// Timed suspension between retries.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// `GET {base}?key=..&q=..&aqi=yes` against WeatherAPI.com.
#[derive(Debug, Clone)]
pub struct WeatherApiSource {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiSource {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    pub fn request_url(&self, city: &str) -> Result<Url> {
        build_request_url(&self.base_url, &self.api_key, city)
    }
}

/// Query string carries the key, the percent-encoded city and the air-quality flag.
pub fn build_request_url(base_url: &str, api_key: &str, city: &str) -> Result<Url> {
    Url::parse_with_params(base_url, &[("key", api_key), ("q", city), ("aqi", "yes")])
        .with_context(|| format!("Invalid weather API base URL: {base_url}"))
}

#[async_trait]
impl WeatherSource for WeatherApiSource {
    async fn current(&self, city: &str) -> Result<RawResponse> {
        let url = self.request_url(city)?;
        tracing::debug!(city, "Requesting current weather");

        // reqwest errors quote the URL, and the URL carries the key.
        let res = self.http.get(url).send().await.map_err(reqwest::Error::without_url)?;

        let status = res.status();
        let body = res.text().await.map_err(reqwest::Error::without_url)?;

        Ok(RawResponse { status, body })
    }
}

/// Retry on `400 Bad Request` with delays of `initial_delay * 2^attempt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_retries: 3, initial_delay: Duration::from_millis(1000) }
    }
}

impl RetryPolicy {
    pub fn should_retry(&self, status: StatusCode, state: RetryState) -> bool {
        status == StatusCode::BAD_REQUEST && state.attempt < self.max_retries
    }

    /// Saturates at `Duration::MAX` for very large attempts or delays.
    pub fn delay_for(&self, state: RetryState) -> Duration {
        2u32.checked_pow(state.attempt)
            .and_then(|factor| self.initial_delay.checked_mul(factor))
            .unwrap_or(Duration::MAX)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetryState {
    pub attempt: u32,
}

impl RetryState {
    pub fn next(self) -> Self {
        Self { attempt: self.attempt + 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Please enter a valid city name.")]
    EmptyCity,

    #[error("Error fetching data: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Network Error: {0}. Please check your connection or try again.")]
    Network(String),

    #[error("Error fetching data: unexpected response format ({0}).")]
    Decode(String),
}

#[derive(Debug)]
pub enum FetchState {
    Loading(RetryState),
    RetryWait { retry: RetryState, delay: Duration },
    Success(WeatherReading),
    Failed(FetchError),
}

#[derive(Debug, Clone)]
pub struct Fetcher<S, W = TokioSleeper> {
    source: S,
    sleeper: W,
    policy: RetryPolicy,
}

impl<S: WeatherSource> Fetcher<S, TokioSleeper> {
    pub fn new(source: S) -> Self {
        Self::with_sleeper(source, TokioSleeper)
    }
}

impl<S: WeatherSource, W: Sleeper> Fetcher<S, W> {
    pub fn with_sleeper(source: S, sleeper: W) -> Self {
        Self { source, sleeper, policy: RetryPolicy::default() }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn sleeper(&self) -> &W {
        &self.sleeper
    }

    /// Fetch `city` and drive `ui` to either the results or the error panel.
    ///
    /// Returned errors have already been shown; they are terminal to this
    /// invocation only.
    pub async fn fetch<U: WeatherUi + ?Sized>(
        &self,
        city: &str,
        ui: &mut U,
    ) -> Result<WeatherReading, FetchError> {
        let mut state = FetchState::Loading(RetryState::default());

        loop {
            state = match state {
                FetchState::Loading(retry) => {
                    ui.hide_results();
                    ui.hide_error();
                    ui.show_loading();

                    if city.is_empty() {
                        FetchState::Failed(FetchError::EmptyCity)
                    } else {
                        self.request(city, retry).await
                    }
                }
                FetchState::RetryWait { retry, delay } => {
                    self.sleeper.sleep(delay).await;
                    FetchState::Loading(retry.next())
                }
                FetchState::Success(reading) => {
                    render(&reading, ui);
                    ui.hide_loading();
                    return Ok(reading);
                }
                FetchState::Failed(err) => {
                    ui.hide_loading();
                    ui.show_error(&err.to_string());
                    return Err(err);
                }
            };
        }
    }

    async fn request(&self, city: &str, retry: RetryState) -> FetchState {
        let res = match self.source.current(city).await {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(city, error = %format!("{err:#}"), "Fetch error");
                return FetchState::Failed(FetchError::Network(format!("{err:#}")));
            }
        };

        if res.status.is_success() {
            return match WeatherReading::from_json(&res.body) {
                Ok(reading) => FetchState::Success(reading),
                Err(err) => FetchState::Failed(FetchError::Decode(format!("{err:#}"))),
            };
        }

        if self.policy.should_retry(res.status, retry) {
            let delay = self.policy.delay_for(retry);
            tracing::warn!(
                attempt = retry.attempt + 1,
                status = res.status.as_u16(),
                delay_ms = delay.as_millis() as u64,
                "Attempt failed, retrying"
            );
            return FetchState::RetryWait { retry, delay };
        }

        let message = provider_error_message(&res.body)
            .unwrap_or_else(|| format!("Error {}.", res.status.as_u16()));

        FetchState::Failed(FetchError::Api { status: res.status, message })
    }
}

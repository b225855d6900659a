use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One current-conditions reading, as returned by WeatherAPI.com `current.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub location_name: String,
    pub country: String,
    /// Provider local time, e.g. "2025-10-05 6:45".
    pub local_time_raw: String,
    pub temp_c: f64,
    pub feels_like_c: f64,
    pub condition_text: String,
    pub condition_icon_url: String,
    pub humidity_pct: u8,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub vis_km: f64,
    pub dewpoint_c: f64,
    pub uv_index: f64,
    /// US EPA category (1..=6); absent when the provider sent no air-quality block.
    pub air_quality_index: Option<u8>,
}

impl WeatherReading {
    /// Decode a successful `current.json` body.
    pub fn from_json(body: &str) -> Result<Self> {
        let parsed: WaResponse =
            serde_json::from_str(body).context("Failed to parse WeatherAPI current JSON")?;

        Ok(parsed.into())
    }
}

impl From<WaResponse> for WeatherReading {
    fn from(parsed: WaResponse) -> Self {
        let WaResponse { location, current } = parsed;

        Self {
            location_name: location.name,
            country: location.country,
            local_time_raw: location.localtime,
            temp_c: current.temp_c,
            feels_like_c: current.feelslike_c,
            condition_text: current.condition.text,
            condition_icon_url: current.condition.icon,
            humidity_pct: current.humidity,
            wind_kph: current.wind_kph,
            wind_dir: current.wind_dir,
            pressure_mb: current.pressure_mb,
            vis_km: current.vis_km,
            dewpoint_c: current.dewpoint_c,
            uv_index: current.uv,
            air_quality_index: current.air_quality.and_then(|aq| aq.us_epa_index),
        }
    }
}

/// Extract `error.message` from an error body, if the provider sent one.
pub fn provider_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<WaErrorResponse>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .and_then(|err| err.message)
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WaAirQuality {
    #[serde(rename = "us-epa-index")]
    us_epa_index: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    feelslike_c: f64,
    condition: WaCondition,
    humidity: u8,
    wind_kph: f64,
    wind_dir: String,
    pressure_mb: f64,
    vis_km: f64,
    dewpoint_c: f64,
    uv: f64,
    air_quality: Option<WaAirQuality>,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[derive(Debug, Deserialize)]
struct WaErrorDetail {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WaErrorResponse {
    error: Option<WaErrorDetail>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// A trimmed `current.json` body for London with `aqi=yes`.
    pub const LONDON: &str = r#"{
        "location": {
            "name": "London",
            "region": "City of London, Greater London",
            "country": "United Kingdom",
            "localtime_epoch": 1759643100,
            "localtime": "2025-10-05 6:45"
        },
        "current": {
            "temp_c": 11.5,
            "feelslike_c": 9.4,
            "condition": {
                "text": "Partly cloudy",
                "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png",
                "code": 1003
            },
            "humidity": 82,
            "wind_kph": 14.8,
            "wind_dir": "WSW",
            "pressure_mb": 1019.0,
            "vis_km": 10.0,
            "dewpoint_c": 8.6,
            "uv": 0.3,
            "air_quality": {
                "pm2_5": 6.1,
                "us-epa-index": 1,
                "gb-defra-index": 1
            }
        }
    }"#;

    /// Same reading without the `air_quality` block.
    pub const LONDON_NO_AQI: &str = r#"{
        "location": { "name": "London", "country": "United Kingdom", "localtime": "2025-10-05 6:45" },
        "current": {
            "temp_c": 11.5,
            "feelslike_c": 9.4,
            "condition": { "text": "Partly cloudy", "icon": "http://cdn.weatherapi.com/weather/64x64/day/116.png" },
            "humidity": 82,
            "wind_kph": 14.8,
            "wind_dir": "WSW",
            "pressure_mb": 1019.0,
            "vis_km": 6.5,
            "dewpoint_c": 8.6,
            "uv": 4.0
        }
    }"#;
}

//! Turns a [`WeatherReading`] into the text of each dashboard slot.

use crate::{
    format::format_local_time,
    model::WeatherReading,
    presenter::{AQI_SCALE, Rgb, classify_aqi, classify_uv},
    ui::WeatherUi,
};

/// Everything the results panel shows, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub location_name: String,
    pub location_country: String,
    pub local_time: String,

    pub temp_c: String,
    pub feels_like: String,

    pub condition_text: String,
    pub condition_icon_url: String,

    pub aqi_value: String,
    pub aqi_color: Rgb,
    pub aqi_status: String,
    pub aqi_bar_color: Rgb,
    /// Provider category 0..=6; 0 when no air-quality data was sent.
    pub aqi_level: u8,

    pub humidity: String,
    pub wind_kph: String,
    pub wind_dir: String,
    pub pressure_mb: String,
    pub vis_km: String,
    pub dewpoint_c: String,

    pub uv_index: String,
    pub uv_status: String,
    pub uv_color: Rgb,
}

impl DashboardView {
    pub fn from_reading(reading: &WeatherReading) -> Self {
        let aqi_level = reading.air_quality_index.unwrap_or(0);
        let aqi = classify_aqi(f64::from(aqi_level) * AQI_SCALE);
        let uv = classify_uv(reading.uv_index);

        let (aqi_value, aqi_status) = match reading.air_quality_index {
            Some(index) => (index.to_string(), aqi.label.to_string()),
            None => ("N/A".to_string(), "Data N/A".to_string()),
        };

        Self {
            location_name: reading.location_name.clone(),
            location_country: reading.country.clone(),
            local_time: format_local_time(&reading.local_time_raw),

            temp_c: round_half_up(reading.temp_c).to_string(),
            feels_like: format!("Feels like: {}°C", round_half_up(reading.feels_like_c)),

            condition_text: reading.condition_text.clone(),
            condition_icon_url: secure_icon_url(&reading.condition_icon_url),

            aqi_value,
            aqi_color: aqi.color,
            aqi_status,
            aqi_bar_color: aqi.bar_color,
            aqi_level,

            humidity: format!("{}%", reading.humidity_pct),
            wind_kph: format!("{} kph", round_half_up(reading.wind_kph)),
            wind_dir: reading.wind_dir.clone(),
            pressure_mb: format!("{} mb", round_half_up(reading.pressure_mb)),
            vis_km: format!("{} km", reading.vis_km),
            dewpoint_c: format!("{}°C", round_half_up(reading.dewpoint_c)),

            uv_index: format!("{:.1}", reading.uv_index),
            uv_status: uv.label.to_string(),
            uv_color: uv.color,
        }
    }
}

/// Write `reading` into the results panel and reveal it.
pub fn render<U: WeatherUi + ?Sized>(reading: &WeatherReading, ui: &mut U) {
    let view = DashboardView::from_reading(reading);
    ui.show_results(&view);
}

/// Provider icons come back protocol-relative (`//cdn...`) or as `http:`.
pub fn secure_icon_url(raw: &str) -> String {
    let rest = raw
        .strip_prefix("https:")
        .or_else(|| raw.strip_prefix("http:"))
        .unwrap_or(raw);

    format!("https:{rest}")
}

/// Nearest integer, halves rounded towards +∞ (-2.5 → -2).
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;

    fn reading(body: &str) -> WeatherReading {
        WeatherReading::from_json(body).expect("fixture must decode")
    }

    #[test]
    fn view_rounds_and_formats_slots() {
        let view = DashboardView::from_reading(&reading(fixtures::LONDON));

        assert_eq!(view.location_name, "London");
        assert_eq!(view.location_country, "United Kingdom");
        assert_eq!(view.local_time, "Sunday, October 5, 2025 at 06:45 AM");
        assert_eq!(view.temp_c, "12");
        assert_eq!(view.feels_like, "Feels like: 9°C");
        assert_eq!(view.humidity, "82%");
        assert_eq!(view.wind_kph, "15 kph");
        assert_eq!(view.pressure_mb, "1019 mb");
        assert_eq!(view.vis_km, "10 km");
        assert_eq!(view.dewpoint_c, "9°C");
        assert_eq!(view.uv_index, "0.3");
        assert_eq!(view.uv_status, "Low");
    }

    #[test]
    fn view_shows_raw_aqi_category_with_label() {
        let view = DashboardView::from_reading(&reading(fixtures::LONDON));

        assert_eq!(view.aqi_value, "1");
        assert_eq!(view.aqi_status, "Good");
        assert_eq!(view.aqi_level, 1);
    }

    #[test]
    fn missing_air_quality_renders_placeholders() {
        let view = DashboardView::from_reading(&reading(fixtures::LONDON_NO_AQI));

        assert_eq!(view.aqi_value, "N/A");
        assert_eq!(view.aqi_status, "Data N/A");
        assert_eq!(view.aqi_level, 0);
        assert_eq!(view.aqi_bar_color.hex(), "#009966");
        assert_eq!(view.vis_km, "6.5 km");
        assert_eq!(view.uv_index, "4.0");
        assert_eq!(view.uv_status, "Moderate");
    }

    #[test]
    fn icon_urls_become_https() {
        assert_eq!(
            secure_icon_url("//cdn.weatherapi.com/weather/64x64/day/116.png"),
            "https://cdn.weatherapi.com/weather/64x64/day/116.png"
        );
        assert_eq!(
            secure_icon_url("http://cdn.weatherapi.com/a.png"),
            "https://cdn.weatherapi.com/a.png"
        );
        assert_eq!(
            secure_icon_url("https://cdn.weatherapi.com/a.png"),
            "https://cdn.weatherapi.com/a.png"
        );
    }

    #[test]
    fn rounding_matches_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-0.4), 0);
        assert_eq!(round_half_up(-0.6), -1);
    }
}

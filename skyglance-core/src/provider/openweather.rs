use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::Config, error::FetchError, icon::WeatherIcon, model::WeatherSnapshot,
    provider::WeatherProvider,
};

pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";

/// OpenWeather "current weather" client.
#[derive(Debug, Clone)]
pub struct OpenWeather {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeather {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OPENWEATHER_BASE_URL)
    }

    /// Same client against a different host. Used by tests to point at a
    /// mock server.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Build the client from config. A missing key is not validated here;
    /// the request simply fails provider-side.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.resolve_api_key())
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        tracing::debug!(%city, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            // Error bodies carry a human-readable `message`; surface it
            // verbatim. Anything else becomes a truncated raw-body message.
            let message = match serde_json::from_str::<OwErrorBody>(&body) {
                Ok(err) => err.message,
                Err(_) => format!(
                    "weather provider returned status {}: {}",
                    status,
                    truncate_body(&body)
                ),
            };
            return Err(FetchError::Provider { message });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        Ok(snapshot_from(parsed))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeather {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        self.fetch_current(city).await
    }
}

/// Build the snapshot in one piece; partial snapshots never escape.
fn snapshot_from(parsed: OwCurrentResponse) -> WeatherSnapshot {
    let icon = parsed
        .weather
        .first()
        .map(|w| WeatherIcon::from_code(&w.icon))
        .unwrap_or(WeatherIcon::Clear);

    WeatherSnapshot {
        temperature_c: parsed.main.temp.floor() as i32,
        humidity_pct: parsed.main.humidity,
        wind_speed_kmh: parsed.wind.speed,
        location: parsed.name,
        latitude: parsed.coord.lat,
        longitude: parsed.coord.lon,
        icon,
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    coord: OwCoord,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: String,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Byte 200 may fall inside a multibyte character; back up to a boundary.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

//! OpenWeatherMap API client

use serde::Deserialize;

use crate::i18n::Language;
use crate::state::{Condition, CurrentWeather, Forecast, ForecastEntry, WeatherReport};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Longest response body excerpt kept in a status error
const BODY_EXCERPT: usize = 200;

/// Provider error type
#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(reqwest::Error),
    #[error("provider answered {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("response parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("malformed response: {0}")]
    Malformed(&'static str),
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct OwCondition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    weather: Vec<OwCondition>,
    main: OwMain,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    #[serde(default)]
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    weather: Vec<OwCondition>,
    main: OwMain,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

// The request URL carries the API key; keep it out of messages and logs
impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        ProviderError::Request(error.without_url())
    }
}

fn first_condition(conditions: Vec<OwCondition>) -> Result<Condition, ProviderError> {
    conditions
        .into_iter()
        .next()
        .map(|c| Condition {
            description: c.description,
            icon: c.icon,
        })
        .ok_or(ProviderError::Malformed("no weather condition"))
}

/// Decode a current-conditions body
pub fn parse_current(body: &str) -> Result<CurrentWeather, ProviderError> {
    let data: OwCurrentResponse = serde_json::from_str(body)?;
    Ok(CurrentWeather {
        city: data.name,
        condition: first_condition(data.weather)?,
        temperature: data.main.temp,
        humidity: data.main.humidity,
        wind_speed: data.wind.speed,
    })
}

/// Decode a forecast body, keeping the slots the view displays
pub fn parse_forecast(body: &str) -> Result<Forecast, ProviderError> {
    let data: OwForecastResponse = serde_json::from_str(body)?;
    let entries = data
        .list
        .into_iter()
        .take(crate::state::FORECAST_LIMIT)
        .map(|entry| {
            Ok(ForecastEntry {
                timestamp: entry.dt,
                condition: first_condition(entry.weather)?,
                temperature: entry.main.temp,
                humidity: entry.main.humidity,
            })
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;
    Ok(Forecast::new(data.city.timezone, entries))
}

fn excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

// ============================================================================
// Client
// ============================================================================

/// Client for the two lookups the view needs
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Request URL for one resource (`weather` or `forecast`)
    pub fn url(&self, resource: &str, city: &str, language: Language) -> String {
        format!(
            "{}/{}?q={}&appid={}&units=metric&lang={}",
            self.base_url,
            resource,
            urlencoding::encode(city),
            urlencoding::encode(&self.api_key),
            language.code()
        )
    }

    async fn get(
        &self,
        resource: &str,
        city: &str,
        language: Language,
    ) -> Result<String, ProviderError> {
        let response = self.http.get(self.url(resource, city, language)).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Status {
                status,
                body: excerpt(&body),
            });
        }
        Ok(body)
    }

    /// Current conditions for `city`
    pub async fn current(
        &self,
        city: &str,
        language: Language,
    ) -> Result<CurrentWeather, ProviderError> {
        let body = self.get("weather", city, language).await?;
        parse_current(&body)
    }

    /// 5-day / 3-hour forecast for `city`
    pub async fn forecast(
        &self,
        city: &str,
        language: Language,
    ) -> Result<Forecast, ProviderError> {
        let body = self.get("forecast", city, language).await?;
        parse_forecast(&body)
    }

    /// Current conditions, then the forecast; the second call is skipped if
    /// the first fails
    pub async fn report(
        &self,
        city: &str,
        language: Language,
    ) -> Result<WeatherReport, ProviderError> {
        let current = self.current(city, language).await?;
        tracing::debug!(city = %current.city, "current conditions loaded");
        let forecast = self.forecast(city, language).await?;
        Ok(WeatherReport { current, forecast })
    }
}

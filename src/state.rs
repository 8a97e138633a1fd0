//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::i18n::Language;

/// Number of forecast slots the view ever shows
pub const FORECAST_LIMIT: usize = 5;

/// Provider icon images, keyed by icon id (e.g. `10d`)
pub const ICON_URL_TEMPLATE: &str = "https://openweathermap.org/img/wn/{icon}.png";

/// One weather condition as reported by the provider
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

impl Condition {
    pub fn icon_url(&self) -> String {
        ICON_URL_TEMPLATE.replace("{icon}", &self.icon)
    }
}

/// Current conditions for the queried city
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurrentWeather {
    pub city: String,
    pub condition: Condition,
    /// Degrees Celsius, as returned
    pub temperature: f64,
    /// Percent
    pub humidity: u8,
    /// Metres per second
    pub wind_speed: f64,
}

/// One 3-hour forecast slot
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastEntry {
    /// Unix seconds
    pub timestamp: i64,
    pub condition: Condition,
    pub temperature: f64,
    pub humidity: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Forecast {
    /// City offset from UTC in seconds
    pub utc_offset: i32,
    pub entries: Vec<ForecastEntry>,
}

impl Forecast {
    /// Build a forecast keeping only the slots the view displays
    pub fn new(utc_offset: i32, entries: impl IntoIterator<Item = ForecastEntry>) -> Self {
        Self {
            utc_offset,
            entries: entries.into_iter().take(FORECAST_LIMIT).collect(),
        }
    }
}

/// Both lookups for one query
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    pub current: CurrentWeather,
    pub forecast: Forecast,
}

/// Failures the view shows to the user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ViewError {
    EmptyQuery,
    CityNotFound,
}

impl ViewError {
    /// Language-independent key kept in `DataResource::Failed`
    pub fn code(self) -> &'static str {
        match self {
            ViewError::EmptyQuery => "empty_query",
            ViewError::CityNotFound => "city_not_found",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "empty_query" => Some(ViewError::EmptyQuery),
            "city_not_found" => Some(ViewError::CityNotFound),
            _ => None,
        }
    }

    pub fn message(self, language: Language) -> &'static str {
        let texts = language.texts();
        match self {
            ViewError::EmptyQuery => texts.empty_query,
            ViewError::CityNotFound => texts.city_not_found,
        }
    }
}

/// Which control receives key input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Focus {
    /// Nothing focused yet (before mount)
    #[default]
    None,
    Query,
    Submit,
    Language,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::None | Focus::Language => Focus::Query,
            Focus::Query => Focus::Submit,
            Focus::Submit => Focus::Language,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::None | Focus::Submit => Focus::Query,
            Focus::Query => Focus::Language,
            Focus::Language => Focus::Submit,
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// City name being typed
    #[debug(section = "Query", label = "Text")]
    pub query: String,

    /// Weather lifecycle: Empty → Loading → Loaded/Failed(error code)
    #[debug(section = "Weather", label = "Data", debug_fmt)]
    pub weather: DataResource<WeatherReport>,

    /// UI language, also selects the temperature unit
    #[debug(section = "Weather", label = "Language", debug_fmt)]
    pub language: Language,

    /// Latest submit; completions carrying another value are stale
    #[debug(section = "Weather", label = "Generation")]
    pub generation: u64,

    #[debug(section = "UI", label = "Focus", debug_fmt)]
    pub focus: Focus,

    /// Set once the mount action has run
    #[debug(skip)]
    pub mounted: bool,
}

impl AppState {
    pub fn new(language: Language) -> Self {
        Self {
            query: String::new(),
            weather: DataResource::Empty,
            language,
            generation: 0,
            focus: Focus::None,
            mounted: false,
        }
    }

    /// Start with the query field pre-filled
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        self.weather.data()
    }

    pub fn view_error(&self) -> Option<ViewError> {
        self.weather.error().and_then(ViewError::from_code)
    }

    /// Failure text in the current language; unknown codes pass through
    pub fn error_message(&self) -> Option<&str> {
        let code = self.weather.error()?;
        Some(ViewError::from_code(code).map_or(code, |error| error.message(self.language)))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(timestamp: i64) -> ForecastEntry {
        ForecastEntry {
            timestamp,
            ..Default::default()
        }
    }

    #[test]
    fn test_forecast_keeps_first_five() {
        let forecast = Forecast::new(0, (0..40).map(entry));
        assert_eq!(forecast.entries.len(), FORECAST_LIMIT);
        assert_eq!(forecast.entries[0].timestamp, 0);
        assert_eq!(forecast.entries[4].timestamp, 4);
    }

    #[test]
    fn test_forecast_with_fewer_entries() {
        let forecast = Forecast::new(0, (0..2).map(entry));
        assert_eq!(forecast.entries.len(), 2);
    }

    #[test]
    fn test_icon_url() {
        let condition = Condition {
            description: "açık".into(),
            icon: "01d".into(),
        };
        assert_eq!(
            condition.icon_url(),
            "https://openweathermap.org/img/wn/01d.png"
        );
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::None.next(), Focus::Query);
        assert_eq!(Focus::Query.next(), Focus::Submit);
        assert_eq!(Focus::Submit.next(), Focus::Language);
        assert_eq!(Focus::Language.next(), Focus::Query);
        assert_eq!(Focus::Query.prev(), Focus::Language);
        assert_eq!(Focus::Language.prev(), Focus::Submit);
    }

    #[test]
    fn test_view_error_messages_are_localized() {
        assert_eq!(
            ViewError::EmptyQuery.message(Language::Tr),
            "Lütfen bir şehir adı giriniz."
        );
        assert_eq!(
            ViewError::CityNotFound.message(Language::En),
            "City not found. Please enter a valid city name."
        );
    }

    #[test]
    fn test_error_message_follows_language() {
        let mut state = AppState {
            weather: DataResource::Failed(ViewError::CityNotFound.code().into()),
            ..AppState::new(Language::Tr)
        };
        assert_eq!(state.view_error(), Some(ViewError::CityNotFound));
        assert_eq!(
            state.error_message(),
            Some("Şehir bulunamadı. Lütfen geçerli bir şehir adı giriniz.")
        );

        state.language = Language::En;
        assert_eq!(
            state.error_message(),
            Some("City not found. Please enter a valid city name.")
        );
    }

    #[test]
    fn test_view_error_codes() {
        for error in [ViewError::EmptyQuery, ViewError::CityNotFound] {
            assert_eq!(ViewError::from_code(error.code()), Some(error));
        }
        assert_eq!(ViewError::from_code("Please enter a city name."), None);
    }
}

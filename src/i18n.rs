//! Localized UI copy and value formatting
//!
//! The view supports exactly two languages. The selected language also
//! decides the temperature unit: Turkish shows Celsius, English Fahrenheit.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// UI language, also used as the provider's `lang` parameter
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Tr,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Tr, Language::En];

    /// Code sent to the provider
    pub fn code(self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
        }
    }

    /// Option label in the language selector (always in its own language)
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Tr => "Türkçe",
            Language::En => "English",
        }
    }

    /// Neighbour in the selector, wrapping around
    pub fn next(self) -> Self {
        match self {
            Language::Tr => Language::En,
            Language::En => Language::Tr,
        }
    }

    pub fn texts(self) -> &'static Texts {
        match self {
            Language::Tr => &TR,
            Language::En => &EN,
        }
    }
}

/// Every piece of fixed copy the view renders
#[derive(Debug)]
pub struct Texts {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub submit: &'static str,
    pub temperature: &'static str,
    pub humidity: &'static str,
    pub wind: &'static str,
    pub status: &'static str,
    pub forecast_title: &'static str,
    pub loading: &'static str,
    pub idle_hint: &'static str,
    pub empty_query: &'static str,
    pub city_not_found: &'static str,
    pub hint_submit: &'static str,
    pub hint_focus: &'static str,
    pub hint_language: &'static str,
    pub hint_quit: &'static str,
}

static TR: Texts = Texts {
    title: "Hava Durumu Uygulaması",
    placeholder: "Şehir giriniz",
    submit: "Hava Durumunu Al",
    temperature: "Sıcaklık",
    humidity: "Nem",
    wind: "Rüzgar",
    status: "Durum",
    forecast_title: "5 Günlük Tahmin",
    loading: "Yükleniyor...",
    idle_hint: "Bir şehir adı yazıp Enter'a basın",
    empty_query: "Lütfen bir şehir adı giriniz.",
    city_not_found: "Şehir bulunamadı. Lütfen geçerli bir şehir adı giriniz.",
    hint_submit: "ara",
    hint_focus: "odak",
    hint_language: "dil",
    hint_quit: "çıkış",
};

static EN: Texts = Texts {
    title: "Weather App",
    placeholder: "Enter city",
    submit: "Get Weather",
    temperature: "Temperature",
    humidity: "Humidity",
    wind: "Wind",
    status: "Status",
    forecast_title: "5-Day Forecast",
    loading: "Loading...",
    idle_hint: "Type a city name and press Enter",
    empty_query: "Please enter a city name.",
    city_not_found: "City not found. Please enter a valid city name.",
    hint_submit: "search",
    hint_focus: "focus",
    hint_language: "language",
    hint_quit: "quit",
};

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Temperature in the unit the language implies.
///
/// Celsius is printed as the provider returned it (`22.5`, `22`, `-3.41`);
/// Fahrenheit always carries one fractional digit.
pub fn format_temperature(celsius: f64, language: Language) -> String {
    match language {
        Language::Tr => format!("{}°C", celsius),
        Language::En => format!("{:.1}°F", break_tenths_tie(celsius_to_fahrenheit(celsius))),
    }
}

/// `{:.1}` rounds exact ties to even; ties here go away from zero instead.
///
/// Only `k.25` and `k.75` are exact ties at one decimal in binary, and those
/// are exactly the values whose quadruple is an odd integer.
fn break_tenths_tie(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        (value * 10.0).round() / 10.0
    } else {
        value
    }
}

/// Forecast slot time in the city's local time.
///
/// `utc_offset` is the provider's `city.timezone` in seconds; out-of-range
/// offsets fall back to UTC.
pub fn format_forecast_time(timestamp: i64, utc_offset: i32, language: Language) -> String {
    let Some(utc) = DateTime::<Utc>::from_timestamp(timestamp, 0) else {
        return timestamp.to_string();
    };
    let offset = FixedOffset::east_opt(utc_offset).unwrap_or_else(|| Utc.fix());
    let local = utc.with_timezone(&offset);
    match language {
        Language::Tr => local.format("%d.%m.%Y %H:%M").to_string(),
        Language::En => local.format("%m/%d/%Y %H:%M").to_string(),
    }
}

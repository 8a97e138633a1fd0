//! Render tests using RenderHarness

use city_weather::{
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    i18n::Language,
    state::{
        AppState, Condition, CurrentWeather, Focus, Forecast, ForecastEntry, ViewError,
        WeatherReport,
    },
};
use tui_dispatch::{DataResource, testing::*};

fn render_state(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = WeatherDisplay::new();

    render.render_to_string_plain(|frame| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn ankara() -> WeatherReport {
    WeatherReport {
        current: CurrentWeather {
            city: "Ankara".into(),
            condition: Condition {
                description: "light rain".into(),
                icon: "10d".into(),
            },
            temperature: -3.41,
            humidity: 88,
            wind_speed: 2.6,
        },
        forecast: Forecast::new(
            0,
            [ForecastEntry {
                timestamp: 1_714_554_000,
                condition: Condition {
                    description: "snow".into(),
                    icon: "13n".into(),
                },
                temperature: -1.0,
                humidity: 91,
            }],
        ),
    }
}

fn loaded(language: Language) -> AppState {
    AppState {
        weather: DataResource::Loaded(ankara()),
        ..AppState::new(language)
    }
}

#[test]
fn test_render_initial_state() {
    let output = render_state(&AppState::default(), 100, 30);

    assert!(output.contains("Hava Durumu Uygulaması"), "title:\n{output}");
    assert!(output.contains("Şehir giriniz"), "placeholder:\n{output}");
    assert!(output.contains("[ Hava Durumunu Al ]"), "submit:\n{output}");
    assert!(output.contains("Türkçe"));
    assert!(output.contains("English"));
}

#[test]
fn test_render_english_copy() {
    let output = render_state(&AppState::new(Language::En), 100, 30);

    assert!(output.contains("Weather App"));
    assert!(output.contains("[ Get Weather ]"));
    assert!(output.contains("Type a city name and press Enter"));
    assert!(!output.contains("Hava Durumu"));
}

#[test]
fn test_render_typed_query() {
    let state = AppState {
        focus: Focus::Query,
        ..AppState::default().with_query("Izmir")
    };
    let output = render_state(&state, 100, 30);

    assert!(output.contains("Izmir"), "query text:\n{output}");
}

#[test]
fn test_render_loading_state() {
    let state = AppState {
        weather: DataResource::Loading,
        ..AppState::default()
    };
    let output = render_state(&state, 100, 30);

    assert!(output.contains("Yükleniyor..."));
}

#[test]
fn test_render_error_state() {
    let state = AppState {
        weather: DataResource::Failed(ViewError::CityNotFound.code().into()),
        ..AppState::new(Language::En)
    };
    let output = render_state(&state, 100, 30);

    assert!(output.contains("City not found. Please enter a valid city name."));
    assert!(!output.contains("Temperature:"));
    assert!(!output.contains("5-Day Forecast"));
}

#[test]
fn test_render_error_in_each_language() {
    for language in Language::ALL {
        let state = AppState {
            weather: DataResource::Failed(ViewError::EmptyQuery.code().into()),
            ..AppState::new(language)
        };
        let output = render_state(&state, 100, 30);

        assert!(
            output.contains(language.texts().empty_query),
            "localized error:\n{output}"
        );
        assert!(!output.contains("empty_query"));
    }
}

#[test]
fn test_render_turkish_report() {
    let output = render_state(&loaded(Language::Tr), 120, 40);

    assert!(output.contains("Light Rain"), "capitalized condition:\n{output}");
    assert!(output.contains("Sıcaklık: -3.41°C"), "raw celsius:\n{output}");
    assert!(output.contains("Nem: 88%"));
    assert!(output.contains("Rüzgar: 2.6 m/s"));
    assert!(output.contains("5 Günlük Tahmin"));
    assert!(output.contains("01.05.2024 09:00"), "forecast date:\n{output}");
    assert!(output.contains("Durum: snow"));
    assert!(output.contains("Sıcaklık: -1°C"));
}

#[test]
fn test_render_english_report() {
    let output = render_state(&loaded(Language::En), 120, 40);

    assert!(output.contains("Temperature: 25.9°F"), "fahrenheit:\n{output}");
    assert!(output.contains("Humidity: 88%"));
    assert!(output.contains("Wind: 2.6 m/s"));
    assert!(output.contains("05/01/2024 09:00"), "forecast date:\n{output}");
    assert!(output.contains("Temperature: 30.2°F"));
}

#[test]
fn test_render_empty_forecast_keeps_current_panel() {
    let state = AppState {
        weather: DataResource::Loaded(WeatherReport {
            forecast: Forecast::default(),
            ..ankara()
        }),
        ..AppState::new(Language::En)
    };
    let output = render_state(&state, 120, 40);

    assert!(output.contains("Temperature: 25.9°F"));
    assert!(output.contains("5-Day Forecast"));
    assert!(!output.contains("Status:"));
}

#[test]
fn test_render_help_bar() {
    let output = render_state(&AppState::new(Language::En), 100, 30);

    assert!(output.contains("search"), "hints:\n{output}");
    assert!(output.contains("focus"));
    assert!(output.contains("language"));
    assert!(output.contains("quit"));
}

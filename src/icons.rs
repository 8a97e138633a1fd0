//! Terminal stand-ins for the provider's condition icons
//!
//! Icon ids look like `10d`: two digits for the condition group, then `d`/`n`
//! for day or night.

use ratatui::style::Color;

/// Weather condition categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherCondition {
    ClearSky,
    FewClouds,
    Cloudy,
    ShowerRain,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
    Unknown,
}

impl WeatherCondition {
    /// Map a provider icon id to its condition group
    pub fn from_icon(icon: &str) -> Self {
        match icon.get(..2) {
            Some("01") => WeatherCondition::ClearSky,
            Some("02") => WeatherCondition::FewClouds,
            Some("03") | Some("04") => WeatherCondition::Cloudy,
            Some("09") => WeatherCondition::ShowerRain,
            Some("10") => WeatherCondition::Rain,
            Some("11") => WeatherCondition::Thunderstorm,
            Some("13") => WeatherCondition::Snow,
            Some("50") => WeatherCondition::Mist,
            _ => WeatherCondition::Unknown,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            WeatherCondition::ClearSky => "\u{2600}\u{fe0f}",
            WeatherCondition::FewClouds => "\u{26c5}",
            WeatherCondition::Cloudy | WeatherCondition::Unknown => "\u{2601}\u{fe0f}",
            WeatherCondition::ShowerRain => "\u{1f326}\u{fe0f}",
            WeatherCondition::Rain => "\u{1f327}\u{fe0f}",
            WeatherCondition::Thunderstorm => "\u{26c8}\u{fe0f}",
            WeatherCondition::Snow => "\u{2744}\u{fe0f}",
            WeatherCondition::Mist => "\u{1f32b}\u{fe0f}",
        }
    }

    /// Accent color for the condition text
    pub fn color(self) -> Color {
        match self {
            WeatherCondition::ClearSky => Color::Yellow,
            WeatherCondition::FewClouds => Color::Rgb(200, 200, 210),
            WeatherCondition::Cloudy | WeatherCondition::Unknown => Color::Rgb(170, 170, 185),
            WeatherCondition::Mist => Color::Rgb(180, 180, 190),
            WeatherCondition::ShowerRain => Color::Rgb(130, 170, 200),
            WeatherCondition::Rain => Color::Rgb(80, 140, 200),
            WeatherCondition::Thunderstorm => Color::Rgb(255, 220, 100),
            WeatherCondition::Snow => Color::Rgb(200, 220, 255),
        }
    }
}

/// Emoji for a provider icon id
pub fn icon_emoji(icon: &str) -> &'static str {
    WeatherCondition::from_icon(icon).emoji()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_from_icon() {
        assert_eq!(WeatherCondition::from_icon("01d"), WeatherCondition::ClearSky);
        assert_eq!(WeatherCondition::from_icon("01n"), WeatherCondition::ClearSky);
        assert_eq!(WeatherCondition::from_icon("02d"), WeatherCondition::FewClouds);
        assert_eq!(WeatherCondition::from_icon("04n"), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_icon("09d"), WeatherCondition::ShowerRain);
        assert_eq!(WeatherCondition::from_icon("10d"), WeatherCondition::Rain);
        assert_eq!(
            WeatherCondition::from_icon("11d"),
            WeatherCondition::Thunderstorm
        );
        assert_eq!(WeatherCondition::from_icon("13d"), WeatherCondition::Snow);
        assert_eq!(WeatherCondition::from_icon("50d"), WeatherCondition::Mist);
    }

    #[test]
    fn test_unknown_icons() {
        assert_eq!(WeatherCondition::from_icon(""), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::from_icon("7"), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::from_icon("99x"), WeatherCondition::Unknown);
        // multi-byte input must not panic
        assert_eq!(WeatherCondition::from_icon("ü1"), WeatherCondition::Unknown);
    }

    #[test]
    fn test_icon_emoji_never_empty() {
        for icon in ["01d", "03d", "11n", "zz"] {
            assert!(!icon_emoji(icon).is_empty());
        }
    }
}

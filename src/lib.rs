//! City weather view for the terminal
//!
//! Type a city, press Enter, and see current conditions plus the next five
//! forecast slots from OpenWeatherMap, in Turkish (°C) or English (°F).

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod i18n;
pub mod icons;
pub mod logging;
pub mod reducer;
pub mod state;

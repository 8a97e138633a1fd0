//! Effects - side effects declared by the reducer

use crate::i18n::Language;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Look up current conditions, then the forecast, for one submit
    FetchWeather {
        generation: u64,
        city: String,
        language: Language,
    },
}

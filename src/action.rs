//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::state::WeatherReport;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== View lifecycle =====
    /// First display: focus the query field
    ViewMount,

    // ===== Query category =====
    /// Query text changed
    QueryChange(String),

    /// Submit the current query (Enter or the submit button)
    QuerySubmit,

    // ===== Weather category =====
    /// Result: both lookups succeeded for the given submit
    WeatherDidLoad { generation: u64, report: WeatherReport },

    /// Result: either lookup failed; `reason` is diagnostic only
    WeatherDidError { generation: u64, reason: String },

    // ===== UI category =====
    /// Select a UI language (no refetch)
    UiLanguageChange(Language),

    /// Move focus to the next control
    UiFocusNext,

    /// Move focus to the previous control
    UiFocusPrev,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Exit the application
    Quit,
}

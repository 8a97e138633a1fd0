//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, Focus, ViewError};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Lifecycle =====
        Action::ViewMount => {
            if state.mounted {
                return DispatchResult::unchanged();
            }
            state.mounted = true;
            state.focus = Focus::Query;
            DispatchResult::changed()
        }

        // ===== Query actions =====
        Action::QueryChange(query) => {
            if state.query == query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        Action::QuerySubmit => {
            let city = state.query.trim();
            if city.is_empty() {
                state.weather = DataResource::Failed(ViewError::EmptyQuery.code().into());
                return DispatchResult::changed();
            }

            let city = city.to_string();
            state.generation = state.generation.wrapping_add(1);
            state.weather = DataResource::Loading;
            tracing::debug!(generation = state.generation, %city, "weather lookup requested");
            DispatchResult::changed_with(Effect::FetchWeather {
                generation: state.generation,
                city,
                language: state.language,
            })
        }

        // ===== Weather results =====
        Action::WeatherDidLoad { generation, report } => {
            if generation != state.generation {
                tracing::debug!(generation, latest = state.generation, "dropping stale report");
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Loaded(report);
            DispatchResult::changed()
        }

        Action::WeatherDidError { generation, reason } => {
            if generation != state.generation {
                tracing::debug!(generation, latest = state.generation, "dropping stale error");
                return DispatchResult::unchanged();
            }
            tracing::warn!(generation, %reason, "weather lookup failed");
            state.weather = DataResource::Failed(ViewError::CityNotFound.code().into());
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiLanguageChange(language) => {
            if state.language == language {
                return DispatchResult::unchanged();
            }
            state.language = language;
            DispatchResult::changed()
        }

        Action::UiFocusNext => {
            state.focus = state.focus.next();
            DispatchResult::changed()
        }

        Action::UiFocusPrev => {
            state.focus = state.focus.prev();
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}

use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::query_bar::QUERY_BAR_HEIGHT;
use super::{Component, QueryBar, QueryBarProps, WeatherBody, WeatherBodyProps};
use crate::action::Action;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole view: query controls, results, key hints
#[derive(Default)]
pub struct WeatherDisplay {
    query_bar: QueryBar,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if key.code == KeyCode::Esc || ctrl_c {
                    return vec![Action::Quit];
                }
            }
        }

        let state = props.state;
        self.query_bar
            .handle_event(
                event,
                QueryBarProps {
                    query: &state.query,
                    language: state.language,
                    focus: state.focus,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(QUERY_BAR_HEIGHT), // Query controls
            Constraint::Length(1),                // Spacer
            Constraint::Min(1),                   // Results
            Constraint::Length(1),                // Help bar
        ])
        .split(area);

        let state = props.state;
        self.query_bar.render(
            frame,
            chunks[0],
            QueryBarProps {
                query: &state.query,
                language: state.language,
                focus: state.focus,
                is_focused: props.is_focused,
            },
        );

        let mut body = WeatherBody;
        body.render(frame, chunks[2], WeatherBodyProps { state });

        let texts = state.language.texts();
        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[3],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("Enter", texts.hint_submit),
                    StatusBarHint::new("Tab", texts.hint_focus),
                    StatusBarHint::new("←/→", texts.hint_language),
                    StatusBarHint::new("Esc", texts.hint_quit),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

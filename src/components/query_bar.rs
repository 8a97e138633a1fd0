use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;
use crate::i18n::Language;
use crate::state::Focus;

/// Title, city input, submit button and language selector
pub struct QueryBar {
    input: TextInput,
}

pub struct QueryBarProps<'a> {
    pub query: &'a str,
    pub language: Language,
    pub focus: Focus,
    pub is_focused: bool,
}

/// Rows the bar needs: title, blank, input (3), controls
pub const QUERY_BAR_HEIGHT: u16 = 6;

const ACCENT: Color = Color::Cyan;
const INPUT_BG: Color = Color::Rgb(50, 50, 60);

fn submit_query(_: String) -> Action {
    Action::QuerySubmit
}

fn ui_render(_: usize) -> Action {
    Action::Render
}

fn input_style() -> TextInputStyle {
    TextInputStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::all(1),
            bg: Some(INPUT_BG),
            fg: None,
        },
        placeholder_style: None,
        cursor_style: None,
    }
}

impl Default for QueryBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl QueryBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn button_line(language: Language, focused: bool) -> Line<'static> {
        let style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT)
        };
        Line::from(Span::styled(
            format!("[ {} ]", language.texts().submit),
            style,
        ))
    }

    fn language_line(selected: Language, focused: bool) -> Line<'static> {
        let mut spans = Vec::with_capacity(Language::ALL.len() * 2);
        for language in Language::ALL {
            let is_selected = language == selected;
            let marker = if is_selected { "(•) " } else { "( ) " };
            let mut style = Style::default().fg(if is_selected {
                Color::Reset
            } else {
                Color::DarkGray
            });
            if is_selected && focused {
                style = style.fg(ACCENT).add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(
                format!("{marker}{}", language.native_name()),
                style,
            ));
            spans.push(Span::raw("  "));
        }
        spans.pop();
        Line::from(spans)
    }
}

impl Component<Action> for QueryBar {
    type Props<'a> = QueryBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }

        match (props.focus, key.code) {
            (_, KeyCode::Tab) => vec![Action::UiFocusNext],
            (_, KeyCode::BackTab) => vec![Action::UiFocusPrev],
            (Focus::Query, KeyCode::Enter) => vec![Action::QuerySubmit],
            (Focus::Query, _) => {
                let input_props = TextInputProps {
                    value: props.query,
                    placeholder: props.language.texts().placeholder,
                    is_focused: true,
                    style: input_style(),
                    on_change: Action::QueryChange,
                    on_submit: submit_query,
                    on_cursor_move: Some(ui_render),
                };
                self.input
                    .handle_event(event, input_props)
                    .into_iter()
                    .collect()
            }
            (Focus::Submit, KeyCode::Enter | KeyCode::Char(' ')) => vec![Action::QuerySubmit],
            (
                Focus::Language,
                KeyCode::Left | KeyCode::Right | KeyCode::Enter | KeyCode::Char(' '),
            ) => vec![Action::UiLanguageChange(props.language.next())],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Input
            Constraint::Length(1), // Button + language selector
        ])
        .split(area);

        let texts = props.language.texts();
        let title = Line::from(Span::styled(
            texts.title,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let [input_area] = Layout::horizontal([Constraint::Max(60)])
            .flex(Flex::Center)
            .areas(chunks[2]);
        let input_props = TextInputProps {
            value: props.query,
            placeholder: texts.placeholder,
            is_focused: props.is_focused && props.focus == Focus::Query,
            style: input_style(),
            on_change: Action::QueryChange,
            on_submit: submit_query,
            on_cursor_move: Some(ui_render),
        };
        self.input.render(frame, input_area, input_props);

        let button = Self::button_line(
            props.language,
            props.is_focused && props.focus == Focus::Submit,
        );
        let selector = Self::language_line(
            props.language,
            props.is_focused && props.focus == Focus::Language,
        );
        let button_width = button.width() as u16;
        let selector_width = selector.width() as u16;
        let [button_area, _, selector_area] = Layout::horizontal([
            Constraint::Length(button_width),
            Constraint::Length(4),
            Constraint::Length(selector_width),
        ])
        .flex(Flex::Center)
        .areas(chunks[3]);
        frame.render_widget(Paragraph::new(button), button_area);
        frame.render_widget(Paragraph::new(selector), selector_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    fn press(code: KeyCode) -> EventKind {
        EventKind::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn props(focus: Focus) -> QueryBarProps<'static> {
        QueryBarProps {
            query: "Istanbul",
            language: Language::Tr,
            focus,
            is_focused: true,
        }
    }

    fn events(bar: &mut QueryBar, focus: Focus, code: KeyCode) -> Vec<Action> {
        bar.handle_event(&press(code), props(focus))
            .into_iter()
            .collect()
    }

    #[test]
    fn test_enter_in_query_submits() {
        let mut bar = QueryBar::new();
        let actions = events(&mut bar, Focus::Query, KeyCode::Enter);
        actions.assert_count(1);
        actions.assert_first(Action::QuerySubmit);
    }

    #[test]
    fn test_button_submits_on_enter_and_space() {
        let mut bar = QueryBar::new();
        events(&mut bar, Focus::Submit, KeyCode::Enter).assert_first(Action::QuerySubmit);
        events(&mut bar, Focus::Submit, KeyCode::Char(' ')).assert_first(Action::QuerySubmit);
        events(&mut bar, Focus::Submit, KeyCode::Char('x')).assert_empty();
    }

    #[test]
    fn test_language_selector_switches() {
        let mut bar = QueryBar::new();
        events(&mut bar, Focus::Language, KeyCode::Right)
            .assert_first(Action::UiLanguageChange(Language::En));
        events(&mut bar, Focus::Language, KeyCode::Left)
            .assert_first(Action::UiLanguageChange(Language::En));
    }

    #[test]
    fn test_tab_moves_focus_from_anywhere() {
        let mut bar = QueryBar::new();
        events(&mut bar, Focus::Query, KeyCode::Tab).assert_first(Action::UiFocusNext);
        events(&mut bar, Focus::Language, KeyCode::BackTab).assert_first(Action::UiFocusPrev);
    }

    #[test]
    fn test_typing_changes_query() {
        let mut bar = QueryBar::new();
        let actions = events(&mut bar, Focus::Query, KeyCode::Char('a'));
        assert!(
            actions
                .iter()
                .any(|action| matches!(action, Action::QueryChange(_))),
            "typing should change the query: {actions:?}"
        );
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut bar = QueryBar::new();
        let unfocused = QueryBarProps {
            is_focused: false,
            ..props(Focus::Query)
        };
        let actions: Vec<_> = bar
            .handle_event(&press(KeyCode::Enter), unfocused)
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_localized_controls() {
        let mut render = RenderHarness::new(80, QUERY_BAR_HEIGHT);
        let mut bar = QueryBar::new();

        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), props(Focus::Query));
        });

        assert!(output.contains("Hava Durumu Uygulaması"));
        assert!(output.contains("Hava Durumunu Al"));
        assert!(output.contains("Türkçe"));
        assert!(output.contains("English"));
    }
}

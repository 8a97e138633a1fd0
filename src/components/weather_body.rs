use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use tui_dispatch::DataResource;

use super::{CityHeader, CityHeaderProps, Component, ERROR_ICON};
use crate::action::Action;
use crate::i18n::{Language, format_forecast_time, format_temperature};
use crate::icons::{WeatherCondition, icon_emoji};
use crate::state::{
    AppState, CurrentWeather, FORECAST_LIMIT, Forecast, ForecastEntry, WeatherReport,
};

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

/// Rows for the big city name
const HEADER_HEIGHT: u16 = 6;
/// Rows for the current-weather panel: border + 5 lines + border
const CURRENT_HEIGHT: u16 = 7;
/// Rows for one forecast card: border + 5 lines + border
const CARD_HEIGHT: u16 = 7;

const PANEL_BORDER: Color = Color::Rgb(90, 90, 110);

// ============================================================================
// Component
// ============================================================================

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let language = props.state.language;
        match WeatherView::from_state(props.state) {
            WeatherView::Error(error) => render_error(frame, area, error),
            WeatherView::Ready(report) => render_ready(frame, area, report, language),
            WeatherView::Loading => {
                render_message(frame, area, language.texts().loading, Color::DarkGray);
            }
            WeatherView::Empty => {
                render_message(frame, area, language.texts().idle_hint, Color::DarkGray);
            }
        }
    }
}

fn panel_block(title: &str) -> Block<'_> {
    Block::bordered()
        .title(Line::from(format!(" {title} ")).bold())
        .title_alignment(ratatui::layout::Alignment::Center)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(PANEL_BORDER))
}

fn label_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
        Span::raw(value),
    ])
    .centered()
}

fn condition_line(icon: &str, description: &str) -> Line<'static> {
    let condition = WeatherCondition::from_icon(icon);
    Line::from(vec![
        Span::raw(condition.emoji()),
        Span::raw(" "),
        Span::styled(
            capitalize(description),
            Style::default().fg(condition.color()),
        ),
    ])
    .centered()
}

fn render_ready(frame: &mut Frame, area: Rect, report: &WeatherReport, language: Language) {
    let chunks = Layout::vertical([
        Constraint::Max(HEADER_HEIGHT),
        Constraint::Length(CURRENT_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(CARD_HEIGHT + 2),
    ])
    .flex(Flex::Start)
    .split(area);

    let mut header = CityHeader;
    header.render(
        frame,
        chunks[0],
        CityHeaderProps {
            city: &report.current.city,
            temperature: Some(report.current.temperature),
        },
    );

    render_current(frame, chunks[1], &report.current, language);
    render_forecast(frame, chunks[3], &report.forecast, language);
}

fn render_current(frame: &mut Frame, area: Rect, current: &CurrentWeather, language: Language) {
    let texts = language.texts();
    let [panel] = Layout::horizontal([Constraint::Max(48)])
        .flex(Flex::Center)
        .areas(area);

    let lines = vec![
        condition_line(&current.condition.icon, &current.condition.description),
        Line::default(),
        label_line(
            texts.temperature,
            format_temperature(current.temperature, language),
        ),
        label_line(texts.humidity, format!("{}%", current.humidity)),
        label_line(texts.wind, format!("{} m/s", current.wind_speed)),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(panel_block(&current.city)),
        panel,
    );
}

fn render_forecast(frame: &mut Frame, area: Rect, forecast: &Forecast, language: Language) {
    let block = panel_block(language.texts().forecast_title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let shown = &forecast.entries[..forecast.entries.len().min(FORECAST_LIMIT)];
    if shown.is_empty() || inner.width == 0 {
        return;
    }

    let cards = Layout::horizontal(
        shown
            .iter()
            .map(|_| Constraint::Ratio(1, shown.len() as u32)),
    )
    .split(inner);

    for (entry, card_area) in shown.iter().zip(cards.iter()) {
        render_card(frame, *card_area, entry, forecast.utc_offset, language);
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    entry: &ForecastEntry,
    utc_offset: i32,
    language: Language,
) {
    let texts = language.texts();
    let lines = vec![
        Line::from(Span::styled(
            format_forecast_time(entry.timestamp, utc_offset, language),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(icon_emoji(&entry.condition.icon)).centered(),
        label_line(texts.status, entry.condition.description.clone()),
        label_line(
            texts.temperature,
            format_temperature(entry.temperature, language),
        ),
        label_line(texts.humidity, format!("{}%", entry.humidity)),
    ];

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(PANEL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let [line_area] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let line = Line::from(Span::styled(message.to_string(), Style::default().fg(color))).centered();
    frame.render_widget(Paragraph::new(line), line_area);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // icon
        Constraint::Length(1), // message
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)).bold(),
            )])
            .centered(),
        ),
        chunks[1],
    );
}

// ============================================================================
// Helpers
// ============================================================================

enum WeatherView<'a> {
    Error(&'a str),
    Ready(&'a WeatherReport),
    Loading,
    Empty,
}

impl<'a> WeatherView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match &state.weather {
            DataResource::Failed(_) => {
                WeatherView::Error(state.error_message().unwrap_or_default())
            }
            DataResource::Loaded(report) => WeatherView::Ready(report),
            DataResource::Loading => WeatherView::Loading,
            DataResource::Empty => WeatherView::Empty,
        }
    }
}

/// Upper-case the first letter of every word (descriptions arrive lower-case)
fn capitalize(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

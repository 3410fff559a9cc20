//! Dashboard header component
//!
//! Renders the title and refresh gauge

use super::super::state::DashboardState;
use crate::environment::Environment;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and refresh status.
pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title_text = match state.environment {
        Environment::Development => format!(
            "{} v{} [{}]",
            state.app_name.to_uppercase(),
            state.app_version,
            state.environment
        ),
        Environment::Production => {
            format!("{} v{}", state.app_name.to_uppercase(), state.app_version)
        }
    };

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (progress_text, gauge_color, progress_percent) = if state.flags.refreshing {
        // Loops every 20 ticks while the refresh is in flight
        let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
        (
            "REFRESHING - Updating charts".to_string(),
            Color::LightYellow,
            progress,
        )
    } else {
        (
            "READY - [R] Refresh Charts".to_string(),
            Color::LightGreen,
            100,
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}

//! Metric cards row
//!
//! One card per metric: value, delta badge against last month and an
//! animated progress gauge.

use super::super::state::DashboardState;
use crate::data::MetricCard;
use crate::data::fixtures::METRIC_CARDS;
use crate::ui::animation::animated_progress;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph};
use std::time::Duration;

/// `▲ 20.1%` for growth, `▼ 3.2%` for decline.
pub fn delta_badge(card: &MetricCard) -> (String, Color) {
    if card.is_positive() {
        (format!("▲ {:.1}%", card.delta.abs()), Color::Green)
    } else {
        (format!("▼ {:.1}%", card.delta.abs()), Color::Red)
    }
}

pub fn render_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let count = METRIC_CARDS.len().max(1) as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area);

    let since_visible = state
        .cards_visible_since()
        .map(|at| at.elapsed())
        .unwrap_or(Duration::ZERO);

    for (index, (card, column)) in METRIC_CARDS.iter().zip(columns.iter()).enumerate() {
        let progress = animated_progress(card.progress, since_visible, index);
        render_card(f, *column, card, progress);
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &MetricCard, progress: u16) {
    let block = Block::default()
        .title(Span::styled(
            card.title.to_uppercase(),
            Style::default().fg(Color::Gray),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(inner);

    let (badge, badge_color) = delta_badge(card);
    let text = vec![
        Line::from(Span::styled(
            card.value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(badge, Style::default().fg(badge_color)),
            Span::styled(" vs last month", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    f.render_widget(Paragraph::new(text), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::LightBlue).bg(Color::DarkGray))
        .percent(progress)
        .label(format!("{}%", progress));
    f.render_widget(gauge, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_badge_direction() {
        let mut card = METRIC_CARDS[0].clone();
        card.delta = 20.1;
        assert_eq!(delta_badge(&card), ("▲ 20.1%".to_string(), Color::Green));

        card.delta = -3.2;
        assert_eq!(delta_badge(&card), ("▼ 3.2%".to_string(), Color::Red));

        card.delta = 0.0;
        assert_eq!(delta_badge(&card).1, Color::Green);
    }
}

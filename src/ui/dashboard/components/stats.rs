//! Aggregate stats panel

use crate::data::DashboardStats;
use crate::ui::dashboard::utils::{format_currency, format_thousands};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_stats_panel(f: &mut Frame, area: Rect, stats: &DashboardStats) {
    let label = Style::default().fg(Color::Gray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let growth_color = if stats.growth >= 0.0 {
        Color::Green
    } else {
        Color::Red
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<14}", "Total users"), label),
            Span::styled(format_thousands(stats.total_users), value),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<14}", "Active users"), label),
            Span::styled(format_thousands(stats.active_users), value),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<14}", "Revenue"), label),
            Span::styled(format_currency(stats.revenue as f64), value),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<14}", "Growth"), label),
            Span::styled(
                format!("{:+.1}%", stats.growth),
                Style::default()
                    .fg(growth_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let block = Block::default()
        .title("OVERVIEW")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

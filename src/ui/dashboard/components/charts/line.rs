//! Revenue trend line chart

use super::{ChartError, ensure_finite};
use crate::data::RevenuePoint;
use crate::ui::dashboard::utils::format_currency;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType};

/// Render current vs previous revenue per period.
pub fn render_line_chart(
    f: &mut Frame,
    area: Rect,
    data: &[RevenuePoint],
) -> Result<(), ChartError> {
    let (first, last) = match (data.first(), data.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ChartError::Empty),
    };
    ensure_finite("revenue", data.iter().map(|p| p.revenue))?;
    ensure_finite("previous revenue", data.iter().map(|p| p.previous_revenue))?;

    let current: Vec<(f64, f64)> = data
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.revenue))
        .collect();
    let previous: Vec<(f64, f64)> = data
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.previous_revenue))
        .collect();

    let peak = data
        .iter()
        .flat_map(|p| [p.revenue, p.previous_revenue])
        .fold(0.0, f64::max);
    let y_max = (peak * 1.1).max(1.0);
    let x_max = (data.len().saturating_sub(1)).max(1) as f64;

    let datasets = vec![
        Dataset::default()
            .name("Revenue")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::LightBlue))
            .data(&current),
        Dataset::default()
            .name("Previous")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&previous),
    ];

    let x_labels = vec![
        Span::raw(first.date),
        Span::raw(data[data.len() / 2].date),
        Span::raw(last.date),
    ];
    let y_labels = vec![
        Span::raw("$0"),
        Span::raw(format_currency(y_max / 2.0)),
        Span::raw(format_currency(y_max)),
    ];

    let change = match last.change_percent() {
        Some(change) if change >= 0.0 => {
            Span::styled(format!(" +{:.1}% ", change), Style::default().fg(Color::Green))
        }
        Some(change) => Span::styled(format!(" {:.1}% ", change), Style::default().fg(Color::Red)),
        None => Span::raw(""),
    };

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(
                "REVENUE TREND",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            change,
        ]))
        .title_bottom(Line::from(Span::styled(
            " Monthly revenue vs previous period ",
            Style::default().fg(Color::DarkGray),
        )))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
    Ok(())
}

//! Traffic source share chart
//!
//! A ring in a terminal reads poorly, so the share is drawn as one stacked
//! band across the panel followed by a legend with proportional bars.

use super::{ChartError, ensure_finite};
use crate::data::TrafficSource;
use crate::ui::dashboard::utils::{format_thousands, hex_color};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Visits represented by one percentage point of share.
const VISITS_PER_POINT: f64 = 100.0;

/// Columns allotted to each source within `width`, summing to `width`.
///
/// Uses largest-remainder rounding so small shares are not lost entirely.
pub fn allocate_columns(shares: &[f64], width: u16) -> Vec<u16> {
    let total: f64 = shares.iter().sum();
    if total <= 0.0 || width == 0 {
        return vec![0; shares.len()];
    }
    let exact: Vec<f64> = shares
        .iter()
        .map(|share| share / total * f64::from(width))
        .collect();
    let mut columns: Vec<u16> = exact.iter().map(|cols| cols.floor() as u16).collect();
    let assigned: u16 = columns.iter().sum();

    let mut order: Vec<usize> = (0..shares.len()).collect();
    order.sort_by(|&a, &b| {
        let rem_a = exact[a] - exact[a].floor();
        let rem_b = exact[b] - exact[b].floor();
        rem_b.total_cmp(&rem_a)
    });
    for &i in order.iter().take(width.saturating_sub(assigned) as usize) {
        columns[i] += 1;
    }
    columns
}

pub fn render_donut_chart(
    f: &mut Frame,
    area: Rect,
    data: &[TrafficSource],
) -> Result<(), ChartError> {
    if data.is_empty() {
        return Err(ChartError::Empty);
    }
    ensure_finite("traffic share", data.iter().map(|s| s.value))?;
    let total: f64 = data.iter().map(|s| s.value).sum();
    if total <= 0.0 {
        return Err(ChartError::NonPositiveTotal);
    }

    let block = Block::default()
        .title(Span::styled(
            "TRAFFIC SOURCES",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(inner);

    let shares: Vec<f64> = data.iter().map(|s| s.value).collect();
    let band: Vec<Span> = allocate_columns(&shares, chunks[0].width)
        .into_iter()
        .zip(data)
        .map(|(cols, source)| {
            Span::styled(
                "█".repeat(cols as usize),
                Style::default().fg(hex_color(source.color)),
            )
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(band)), chunks[0]);

    let legend_bar_width = chunks[2].width.saturating_sub(40).max(4);
    let legend: Vec<Line> = data
        .iter()
        .map(|source| {
            let percent = source.value / total * 100.0;
            let filled = ((percent / 100.0) * f64::from(legend_bar_width)).round() as usize;
            Line::from(vec![
                Span::styled("● ", Style::default().fg(hex_color(source.color))),
                Span::raw(format!("{:<15}", source.name)),
                Span::styled(
                    format!("{:>5.1}% ", percent),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:<width$}", "▪".repeat(filled), width = legend_bar_width as usize),
                    Style::default().fg(hex_color(source.color)),
                ),
                Span::styled(
                    format!(
                        " {} visits",
                        format_thousands((source.value * VISITS_PER_POINT).round() as u64)
                    ),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(legend), chunks[2]);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::TRAFFIC_SOURCES;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(data: &[TrafficSource]) -> (Result<(), ChartError>, String) {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let mut result = Ok(());
        terminal
            .draw(|f| {
                let area = f.area();
                result = render_donut_chart(f, area, data);
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        (result, text)
    }

    #[test]
    fn test_columns_fill_width_exactly() {
        let columns = allocate_columns(&[42.0, 24.0, 18.0, 10.0, 6.0], 37);
        assert_eq!(columns.iter().sum::<u16>(), 37);
        assert!(columns.iter().all(|cols| *cols > 0));
    }

    #[test]
    fn test_columns_for_degenerate_input() {
        assert_eq!(allocate_columns(&[0.0, 0.0], 10), vec![0, 0]);
        assert_eq!(allocate_columns(&[1.0], 0), vec![0]);
    }

    #[test]
    fn test_renders_legend_with_visits() {
        let (result, text) = draw(TRAFFIC_SOURCES);
        assert_eq!(result, Ok(()));
        assert!(text.contains("Organic Search"));
        assert!(text.contains("4,200 visits"));
    }

    #[test]
    fn test_rejects_zero_total() {
        let data = [TrafficSource {
            name: "Direct",
            value: 0.0,
            color: "#10b981",
        }];
        assert_eq!(draw(&data).0, Err(ChartError::NonPositiveTotal));
        assert_eq!(draw(&[]).0, Err(ChartError::Empty));
    }
}

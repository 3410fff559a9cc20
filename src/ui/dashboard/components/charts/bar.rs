//! Campaign performance bar chart

use super::{ChartError, ensure_finite};
use crate::data::CampaignData;
use crate::ui::dashboard::utils::{format_percent, format_thousands};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph};

const BAR_COLORS: [Color; 5] = [
    Color::LightBlue,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightMagenta,
    Color::LightCyan,
];

/// Render clicks per campaign with derived CTR, conversion rate and CPC below.
pub fn render_bar_chart(f: &mut Frame, area: Rect, data: &[CampaignData]) -> Result<(), ChartError> {
    if data.is_empty() {
        return Err(ChartError::Empty);
    }
    ensure_finite("campaign cost", data.iter().map(|c| c.cost))?;

    let block = Block::default()
        .title(Span::styled(
            "CAMPAIGN CLICKS",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let detail_height = (data.len() as u16).min(inner.height / 2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(detail_height)])
        .split(inner);

    let gap = 1u16;
    let count = data.len() as u16;
    let bar_width = (chunks[0].width.saturating_sub(gap * count.saturating_sub(1)) / count).max(1);

    let bars: Vec<Bar> = data
        .iter()
        .enumerate()
        .map(|(i, campaign)| {
            let color = BAR_COLORS[i % BAR_COLORS.len()];
            Bar::default()
                .value(campaign.clicks)
                .text_value(format_thousands(campaign.clicks))
                .label(Line::from(short_label(campaign.name, bar_width)))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap);
    f.render_widget(chart, chunks[0]);

    let details: Vec<Line> = data
        .iter()
        .take(detail_height as usize)
        .enumerate()
        .map(|(i, campaign)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<16}", campaign.name),
                    Style::default().fg(BAR_COLORS[i % BAR_COLORS.len()]),
                ),
                Span::styled(" CTR ", Style::default().fg(Color::Gray)),
                Span::raw(format_percent(campaign.ctr())),
                Span::styled("  CVR ", Style::default().fg(Color::Gray)),
                Span::raw(format_percent(campaign.conversion_rate())),
                Span::styled("  CPC ", Style::default().fg(Color::Gray)),
                Span::raw(
                    campaign
                        .cost_per_click()
                        .map_or_else(|| "n/a".to_string(), |cpc| format!("${:.2}", cpc)),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(details), chunks[1]);

    Ok(())
}

/// Truncate a campaign name to fit under its bar.
fn short_label(name: &str, width: u16) -> String {
    name.chars().take(width as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::CAMPAIGN_DATA;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_fixture_with_ratios() {
        let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
        let mut result = Ok(());
        terminal
            .draw(|f| {
                let area = f.area();
                result = render_bar_chart(f, area, CAMPAIGN_DATA);
            })
            .unwrap();
        assert_eq!(result, Ok(()));

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        // Summer Sale: 2,250 clicks over 45,000 impressions.
        assert!(text.contains("CTR 5.00%"));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let mut result = Ok(());
        terminal
            .draw(|f| {
                let area = f.area();
                result = render_bar_chart(f, area, &[]);
            })
            .unwrap();
        assert_eq!(result, Err(ChartError::Empty));
    }

    #[test]
    fn test_short_label() {
        assert_eq!(short_label("Black Friday", 5), "Black");
        assert_eq!(short_label("Sale", 10), "Sale");
    }
}

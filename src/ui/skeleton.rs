//! Skeleton placeholders shown while content is not ready.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const SHIMMER_WIDTH: usize = 6;

/// One placeholder bar of `width` cells with a shimmer band moving with `tick`.
fn shimmer_line(width: usize, tick: usize) -> Line<'static> {
    if width == 0 {
        return Line::default();
    }
    let head = tick % (width + SHIMMER_WIDTH);
    let spans = (0..width)
        .map(|i| {
            let lit = i < head && head - i <= SHIMMER_WIDTH;
            let color = if lit { Color::Gray } else { Color::DarkGray };
            Span::styled("░", Style::default().fg(color))
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// Placeholder panel: a bordered block filled with shimmering bars of varying width.
pub fn render_skeleton_panel(f: &mut Frame, area: Rect, title: &str, tick: usize) {
    let block = Block::default()
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;
    let lines: Vec<Line> = (0..inner.height as usize)
        .map(|row| {
            if row % 2 == 1 {
                return Line::default();
            }
            // Alternate full and partial rows so the panel reads as content.
            let row_width = if row % 4 == 0 { width } else { width * 2 / 3 };
            shimmer_line(row_width, tick + row)
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

/// Whole-screen placeholder shown during the initial load.
pub fn render_skeleton_screen(f: &mut Frame, app_name: &str, tick: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Percentage(30),
        ])
        .margin(1)
        .split(f.area());

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            app_name.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Loading dashboard...",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::ITALIC),
        )),
    ]);
    f.render_widget(title, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(chunks[1]);
    for (i, card) in cards.iter().enumerate() {
        render_skeleton_panel(f, *card, "", tick + i * 3);
    }

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(chunks[2]);
    for chart in charts.iter() {
        render_skeleton_panel(f, *chart, "", tick);
    }

    render_skeleton_panel(f, chunks[3], "", tick);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_shimmer_line_width() {
        assert_eq!(shimmer_line(12, 3).width(), 12);
        assert_eq!(shimmer_line(0, 3).width(), 0);
    }

    #[test]
    fn test_skeleton_screen_shows_loading_text() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| render_skeleton_screen(f, "Analytics Dashboard", 4))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Loading dashboard..."));
        assert!(text.contains("░"));
    }
}

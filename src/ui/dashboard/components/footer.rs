//! Dashboard footer component
//!
//! Renders footer with key hints

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Key hints; search mode swaps in its own.
pub fn footer_text(search_active: bool, charts_failed: bool) -> String {
    if search_active {
        return "Type to filter | [Enter] Done | [Esc] Done | [Backspace] Delete".to_string();
    }
    let mut text = "[Q] Quit | [R] Refresh | [/] Search | [1-5] Sort | [←/→] Page | [P] Page size | [E] Export".to_string();
    if charts_failed {
        text.push_str(" | [X] Retry charts");
    }
    text
}

pub fn render_footer(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    search_active: bool,
    charts_failed: bool,
) {
    let footer_color = if search_active {
        Color::LightBlue
    } else {
        Color::Cyan
    };

    let footer = Paragraph::new(footer_text(search_active, charts_failed))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(footer_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_hint_only_after_failure() {
        assert!(!footer_text(false, false).contains("[X]"));
        assert!(footer_text(false, true).ends_with("[X] Retry charts"));
        assert!(footer_text(true, true).starts_with("Type to filter"));
    }
}

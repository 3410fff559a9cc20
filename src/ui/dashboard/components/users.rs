//! Recent users panel, filtered by the same query as the campaign table

use super::super::utils::role_color;
use crate::data::User;
use crate::search;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_users_panel(f: &mut Frame, area: Rect, users: &[User], query: &str) {
    let matching = search::filter(users, query);

    let lines: Vec<Line> = if matching.is_empty() {
        vec![Line::from(Span::styled(
            "No users found",
            Style::default().fg(Color::Gray),
        ))]
    } else {
        matching
            .iter()
            .map(|user| {
                Line::from(vec![
                    Span::styled(
                        format!("({}) ", user.initial()),
                        Style::default()
                            .fg(role_color(user.role))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{:<14}", user.name),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("{:<20}", user.email),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(user.role.to_string(), Style::default().fg(role_color(user.role))),
                ])
            })
            .collect()
    };

    let block = Block::default()
        .title(format!("RECENT USERS ({} total)", users.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::USERS;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(query: &str) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 8)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_users_panel(f, area, USERS, query);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_query_filters_by_role() {
        let text = draw("man");
        assert!(text.contains("Mike Johnson"));
        assert!(!text.contains("John Doe"));
        assert!(!text.contains("Jane Smith"));
        assert!(text.contains("(3 total)"));
    }

    #[test]
    fn test_no_match_notice() {
        assert!(draw("nobody").contains("No users found"));
    }
}

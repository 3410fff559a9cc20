//! Dashboard main renderer

use super::components::charts::{bar, donut, line};
use super::components::{cards, footer, header, logs, stats, table, users};
use super::state::DashboardState;
use crate::data::fixtures::{CAMPAIGN_DATA, DASHBOARD_STATS, REVENUE_DATA, TRAFFIC_SOURCES, USERS};
use crate::ui::skeleton::render_skeleton_panel;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let area = f.area();
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            area,
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(area);

    header::render_header(f, main_chunks[0], state);
    cards::render_cards(f, main_chunks[1], state);

    let direction = if state.narrow {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let content_chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_chunks[2]);

    render_charts(f, content_chunks[0], state);
    render_data_column(f, content_chunks[1], state);

    logs::render_logs_panel(f, main_chunks[3], state);
    footer::render_footer(
        f,
        main_chunks[4],
        state.search_active,
        state.boundaries.any_failed(),
    );
}

fn render_charts(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    if state.flags.is_loading() {
        render_skeleton_panel(f, rows[0], "REVENUE TREND", state.tick);
        render_skeleton_panel(f, lower[0], "CAMPAIGN CLICKS", state.tick + 2);
        render_skeleton_panel(f, lower[1], "TRAFFIC SOURCES", state.tick + 4);
        return;
    }

    let boundaries = &state.boundaries;
    boundaries
        .line
        .render(f, rows[0], |f, area| line::render_line_chart(f, area, REVENUE_DATA));
    boundaries
        .bar
        .render(f, lower[0], |f, area| bar::render_bar_chart(f, area, CAMPAIGN_DATA));
    boundaries
        .donut
        .render(f, lower[1], |f, area| donut::render_donut_chart(f, area, TRAFFIC_SOURCES));
}

fn render_data_column(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(8)])
        .split(area);

    table::render_table_panel(f, rows[0], state);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);
    stats::render_stats_panel(f, lower[0], &DASHBOARD_STATS);
    users::render_users_panel(f, lower[1], USERS, state.table.query());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::loading::LoadingFlags;
    use crate::ui::app::UIConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(state: &DashboardState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn state() -> DashboardState {
        DashboardState::new(UIConfig::new(
            "Analytics Dashboard",
            "1.0.0",
            Environment::Production,
        ))
    }

    #[test]
    fn test_ready_dashboard_renders_every_panel() {
        let mut state = state();
        state.set_flags(LoadingFlags {
            initial_loading: false,
            refreshing: false,
        });
        let text = draw(&state, 160, 60);
        for title in [
            "ANALYTICS DASHBOARD v1.0.0",
            "REVENUE TREND",
            "CAMPAIGN CLICKS",
            "TRAFFIC SOURCES",
            "CAMPAIGNS",
            "OVERVIEW",
            "RECENT USERS",
            "ACTIVITY LOG",
        ] {
            assert!(text.contains(title), "missing {title}");
        }
        assert!(text.contains("Summer Sale 2024"));
        assert!(!state.boundaries.any_failed());
    }

    #[test]
    fn test_refreshing_dashboard_shows_skeletons() {
        let mut state = state();
        state.set_flags(LoadingFlags {
            initial_loading: false,
            refreshing: true,
        });
        let text = draw(&state, 160, 60);
        assert!(text.contains("REFRESHING"));
        assert!(text.contains("░"));
        assert!(!text.contains("Summer Sale 2024"));
    }
}

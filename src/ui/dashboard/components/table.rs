//! Campaign table panel
//!
//! Search line, sortable column headers, the current page of rows and a
//! pagination footer.

use super::super::state::DashboardState;
use super::super::utils::{format_currency, format_thousands, roi_color, status_color};
use crate::consts::cli_consts::table::SKELETON_ROWS;
use crate::data::CampaignTableRow;
use crate::table::{CampaignTable, SortColumn};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};
use strum::IntoEnumIterator;

const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Fill(1),
    Constraint::Length(8),
    Constraint::Length(9),
    Constraint::Length(9),
    Constraint::Length(9),
];

/// Header label for `column`, with the sort arrow when it is the active sort.
pub fn header_label(table: &CampaignTable, column: SortColumn) -> String {
    match table.sort() {
        Some(sort) if sort.column == column => format!("{} {}", column, sort.direction.arrow()),
        _ => column.to_string(),
    }
}

/// "Rows 1-5 of 5 | Page 1/1 | 10 per page", or a notice for an empty result.
pub fn pagination_summary(table: &CampaignTable) -> String {
    let page = table.current_page();
    match page.row_range(table.page_size()) {
        Some((first, last)) => format!(
            "Rows {}-{} of {} | Page {}/{} | {} per page",
            first,
            last,
            page.total_rows,
            page.index + 1,
            page.total_pages,
            table.page_size()
        ),
        None => format!(
            "No rows | Page 1/1 | {} per page",
            table.page_size()
        ),
    }
}

fn campaign_row(row: &CampaignTableRow) -> Row<'static> {
    Row::new(vec![
        Cell::from(row.campaign),
        Cell::from(Span::styled(
            row.status.to_string(),
            Style::default().fg(status_color(row.status)),
        )),
        Cell::from(Line::from(format_thousands(row.clicks)).alignment(Alignment::Right)),
        Cell::from(Line::from(format_currency(row.cost)).alignment(Alignment::Right)),
        Cell::from(
            Line::from(Span::styled(
                format!("{:.1}%", row.roi),
                Style::default().fg(roi_color(row.roi)),
            ))
            .alignment(Alignment::Right),
        ),
    ])
}

fn skeleton_row(index: usize, tick: usize) -> Row<'static> {
    let color = if (index + tick / 2) % 4 == 0 {
        Color::Gray
    } else {
        Color::DarkGray
    };
    let style = Style::default().fg(color);
    Row::new(
        [14usize, 6, 6, 6, 5]
            .into_iter()
            .map(|width| Cell::from(Span::styled("░".repeat(width), style))),
    )
}

pub fn render_table_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let table = &state.table;

    let block = Block::default()
        .title(Span::styled(
            "CAMPAIGNS",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(" [1-5] Sort  [←/→] Page  [P] Page size  [E] Export CSV ").right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let search_line = if state.search_active {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::LightBlue)),
            Span::raw(table.query().to_string()),
            Span::styled("█", Style::default().fg(Color::LightBlue)),
        ])
    } else if table.query().is_empty() {
        Line::from(Span::styled(
            "[/] Search campaigns...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Gray)),
            Span::raw(table.query().to_string()),
        ])
    };
    f.render_widget(Paragraph::new(search_line), chunks[0]);

    let header = Row::new(
        SortColumn::iter().map(|column| Cell::from(header_label(table, column))),
    )
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    if state.flags.is_loading() {
        let rows = (0..SKELETON_ROWS).map(|i| skeleton_row(i, state.tick));
        f.render_widget(Table::new(rows, COLUMN_WIDTHS).header(header), chunks[1]);
        return;
    }

    let page = table.current_page();
    if page.rows.is_empty() {
        let notice = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No campaigns found",
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(notice, chunks[1]);
    } else {
        let rows = page.rows.iter().map(|row| campaign_row(row));
        f.render_widget(Table::new(rows, COLUMN_WIDTHS).header(header), chunks[1]);
    }

    f.render_widget(
        Paragraph::new(pagination_summary(table)).style(Style::default().fg(Color::Gray)),
        chunks[2],
    );
}

//! Dashboard state management
//!
//! Contains the main dashboard state struct and its chart boundaries

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::consts::cli_consts::table::{DEFAULT_PAGE_SIZE, NARROW_PAGE_SIZE};
use crate::data::fixtures::CAMPAIGN_TABLE;
use crate::environment::Environment;
use crate::events::Event;
use crate::loading::LoadingFlags;
use crate::table::CampaignTable;
use crate::ui::app::UIConfig;
use crate::ui::boundary::RenderBoundary;

use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Instant;

/// One render boundary per independently failing panel.
#[derive(Debug)]
pub struct ChartBoundaries {
    pub line: RenderBoundary,
    pub bar: RenderBoundary,
    pub donut: RenderBoundary,
}

impl ChartBoundaries {
    fn new() -> Self {
        Self {
            line: RenderBoundary::new("Revenue chart"),
            bar: RenderBoundary::new("Campaign chart"),
            donut: RenderBoundary::new("Traffic chart"),
        }
    }

    pub fn any_failed(&self) -> bool {
        self.line.has_failed() || self.bar.has_failed() || self.donut.has_failed()
    }

    pub fn retry_all(&self) {
        self.line.retry();
        self.bar.retry();
        self.donut.retry();
    }
}

/// Dashboard state: loading flags, table view, activity log and animation clock.
#[derive(Debug)]
pub struct DashboardState {
    /// Display name from config or `DASHBOARD_APP_NAME`.
    pub app_name: String,
    /// Display version from config or `DASHBOARD_APP_VERSION`.
    pub app_version: String,
    /// The environment in which the application is running.
    pub environment: Environment,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Narrow layout: stacked panels and smaller pages.
    pub narrow: bool,
    /// Directory CSV exports are written to.
    pub export_dir: PathBuf,
    /// Latest loading flags observed from the loading state.
    pub flags: LoadingFlags,
    /// Campaign table view (query, sort, page).
    pub table: CampaignTable,
    /// Whether key presses currently edit the search query.
    pub search_active: bool,
    pub boundaries: ChartBoundaries,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Animation tick counter
    pub tick: usize,
    /// When the metric cards first became visible.
    cards_visible_since: Option<Instant>,
}

impl DashboardState {
    pub fn new(ui_config: UIConfig) -> Self {
        let page_size = match ui_config.page_size {
            Some(size) => size,
            None if ui_config.narrow => NARROW_PAGE_SIZE,
            None => DEFAULT_PAGE_SIZE,
        };
        Self {
            app_name: ui_config.app_name,
            app_version: ui_config.app_version,
            environment: ui_config.environment,
            with_background_color: ui_config.with_background_color,
            narrow: ui_config.narrow,
            export_dir: ui_config.export_dir,
            flags: LoadingFlags::default(),
            table: CampaignTable::new(CAMPAIGN_TABLE, page_size),
            search_active: false,
            boundaries: ChartBoundaries::new(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            cards_visible_since: None,
        }
    }

    pub fn cards_visible_since(&self) -> Option<Instant> {
        self.cards_visible_since
    }

    pub fn set_cards_visible_since(&mut self, at: Instant) {
        self.cards_visible_since.get_or_insert(at);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ui_config(narrow: bool, page_size: Option<usize>) -> UIConfig {
        UIConfig {
            narrow,
            page_size,
            ..UIConfig::new("Analytics Dashboard", "1.0.0", Environment::Production)
        }
    }

    #[test]
    fn test_narrow_layout_defaults_to_five_rows() {
        let state = DashboardState::new(ui_config(true, None));
        assert_eq!(state.table.page_size(), 5);
    }

    #[test]
    fn test_wide_layout_defaults_to_ten_rows() {
        let state = DashboardState::new(ui_config(false, None));
        assert_eq!(state.table.page_size(), 10);
    }

    #[test]
    fn test_explicit_page_size_wins_over_narrow() {
        let state = DashboardState::new(ui_config(true, Some(20)));
        assert_eq!(state.table.page_size(), 20);
    }
}

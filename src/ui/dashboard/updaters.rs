//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events and key presses

use super::state::DashboardState;

use crate::events::targets;
use crate::export;
use crate::loading::LoadingFlags;
use crate::table::SortColumn;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::Instant;

/// What the UI loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Quit,
    Refresh,
}

impl DashboardState {
    /// Advance the animation tick and drain queued events into the activity log.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }

        if self.flags.is_ready() {
            self.set_cards_visible_since(Instant::now());
        }
    }

    /// Apply the latest loading flags.
    pub fn set_flags(&mut self, flags: LoadingFlags) {
        self.flags = flags;
    }

    /// Handle a key press and tell the caller whether to quit or refresh.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if self.search_active {
            self.handle_search_key(key.code);
            return KeyAction::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => {
                // Same as the disabled refresh button while a refresh is in flight.
                if self.flags.is_ready() && !self.flags.refreshing {
                    return KeyAction::Refresh;
                }
            }
            KeyCode::Char('/') => self.search_active = true,
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(column) = c.to_digit(10).and_then(|d| SortColumn::from_position(d as usize)) {
                    self.table.sort_by(column);
                    if let Some(sort) = self.table.sort() {
                        log::debug!(target: targets::TABLE, "Sorted by {} {}", sort.column, sort.direction.arrow());
                    }
                }
            }
            KeyCode::Left => self.table.previous_page(),
            KeyCode::Right => self.table.next_page(),
            KeyCode::Char('p') => {
                self.table.cycle_page_size();
                log::debug!(target: targets::TABLE, "Showing {} rows per page", self.table.page_size());
            }
            KeyCode::Char('e') => {
                self.export_csv();
            }
            KeyCode::Char('x') => self.boundaries.retry_all(),
            _ => {}
        }
        KeyAction::Continue
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => self.search_active = false,
            KeyCode::Backspace => self.table.pop_query_char(),
            KeyCode::Char(c) => self.table.push_query_char(c),
            _ => {}
        }
    }

    /// Write the filtered rows to a dated CSV in the export directory.
    pub fn export_csv(&self) -> Option<PathBuf> {
        let rows = self.table.filtered();
        let today = chrono::Local::now().date_naive();
        match export::export_to_dir(&self.export_dir, today, &rows) {
            Ok(path) => {
                log::info!(target: targets::EXPORT, "Exported {} campaigns to {}", rows.len(), path.display());
                Some(path)
            }
            Err(e) => {
                log::error!(target: targets::EXPORT, "Export failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::events::{Event, Source};
    use crate::logging::LogLevel;
    use crate::table::SortDirection;
    use crate::ui::app::UIConfig;

    fn ready_state(export_dir: PathBuf) -> DashboardState {
        let mut state = DashboardState::new(UIConfig {
            export_dir,
            ..UIConfig::new("Analytics Dashboard", "1.0.0", Environment::Production)
        });
        state.set_flags(LoadingFlags {
            initial_loading: false,
            refreshing: false,
        });
        state
    }

    fn press(state: &mut DashboardState, code: KeyCode) -> KeyAction {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_refresh_key_ignored_while_busy() {
        let mut state = ready_state(PathBuf::from("."));
        assert_eq!(press(&mut state, KeyCode::Char('r')), KeyAction::Refresh);

        state.set_flags(LoadingFlags {
            initial_loading: false,
            refreshing: true,
        });
        assert_eq!(press(&mut state, KeyCode::Char('r')), KeyAction::Continue);

        state.set_flags(LoadingFlags::default());
        assert_eq!(press(&mut state, KeyCode::Char('r')), KeyAction::Continue);
    }

    #[test]
    fn test_search_mode_captures_keys() {
        let mut state = ready_state(PathBuf::from("."));
        press(&mut state, KeyCode::Char('/'));
        for c in "qa".chars() {
            assert_eq!(press(&mut state, KeyCode::Char(c)), KeyAction::Continue);
        }
        assert_eq!(state.table.query(), "qa");

        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.table.query(), "q");

        press(&mut state, KeyCode::Esc);
        assert!(!state.search_active);
        assert_eq!(press(&mut state, KeyCode::Esc), KeyAction::Quit);
    }

    #[test]
    fn test_number_keys_sort_columns() {
        let mut state = ready_state(PathBuf::from("."));
        press(&mut state, KeyCode::Char('5'));
        press(&mut state, KeyCode::Char('5'));
        let sort = state.table.sort().unwrap();
        assert_eq!(sort.column, SortColumn::Roi);
        assert_eq!(sort.direction, SortDirection::Descending);
        assert_eq!(state.table.current_page().rows[0].campaign, "Black Friday Deals");
    }

    #[test]
    fn test_update_moves_events_to_log() {
        let mut state = ready_state(PathBuf::from("."));
        state.add_event(Event::new(Source::Refresh, "Refreshed", LogLevel::Info));
        assert!(state.cards_visible_since().is_none());

        state.update();
        assert!(state.pending_events.is_empty());
        assert_eq!(state.activity_logs.len(), 1);
        assert!(state.cards_visible_since().is_some());
    }

    #[test]
    fn test_cards_not_visible_during_initial_load() {
        let mut state = ready_state(PathBuf::from("."));
        state.set_flags(LoadingFlags::default());
        state.update();
        assert!(state.cards_visible_since().is_none());
    }

    #[test]
    fn test_export_key_writes_filtered_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = ready_state(dir.path().to_path_buf());
        state.table.set_query("paused");

        let path = state.export_csv().unwrap();
        let contents = std::fs::read_to_string(path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.contains("Black Friday Deals"));
    }
}

//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::UI_POLL_MS;
use crate::environment::Environment;
use crate::events::Event as DashboardEvent;
use crate::loading::{LoadingFlags, LoadingState, RefreshSource};
use crate::ui::dashboard::{DashboardState, KeyAction, render_dashboard};
use crate::ui::skeleton::render_skeleton_screen;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub app_name: String,
    pub app_version: String,
    pub environment: Environment,
    pub with_background_color: bool,
    /// Stack panels vertically and default to the small page size.
    pub narrow: bool,
    /// Explicit page size; `None` picks one from `narrow`.
    pub page_size: Option<usize>,
    pub export_dir: PathBuf,
}

impl UIConfig {
    pub fn new(
        app_name: impl Into<String>,
        app_version: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            app_version: app_version.into(),
            environment,
            with_background_color: true,
            narrow: false,
            page_size: None,
            export_dir: PathBuf::from("."),
        }
    }
}

/// Application state
pub struct App {
    dashboard: DashboardState,

    /// Shared loading flags; the UI mounts it and triggers refreshes on it.
    loading: LoadingState,

    /// Observes every loading flag change.
    flags: watch::Receiver<LoadingFlags>,

    /// Receives activity events from the event logger.
    event_receiver: mpsc::Receiver<DashboardEvent>,

    /// Backing call awaited by each refresh.
    refresh_source: Arc<dyn RefreshSource>,

    /// Refreshes still in flight, aborted on exit.
    refresh_tasks: Vec<JoinHandle<()>>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        ui_config: UIConfig,
        loading: LoadingState,
        event_receiver: mpsc::Receiver<DashboardEvent>,
        refresh_source: Arc<dyn RefreshSource>,
    ) -> Self {
        let flags = loading.subscribe();
        Self {
            dashboard: DashboardState::new(ui_config),
            loading,
            flags,
            event_receiver,
            refresh_source,
            refresh_tasks: Vec::new(),
        }
    }

    /// Pull queued events and the latest flags into the dashboard, then tick it.
    fn sync(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dashboard.add_event(event);
        }
        let flags = *self.flags.borrow_and_update();
        self.dashboard.set_flags(flags);
        self.dashboard.update();
        self.refresh_tasks.retain(|task| !task.is_finished());
    }

    fn start_refresh(&mut self) {
        let task = self.loading.spawn_refresh(Arc::clone(&self.refresh_source));
        self.refresh_tasks.push(task);
    }

    fn shutdown(&mut self) {
        for task in self.refresh_tasks.drain(..) {
            task.abort();
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    // Dropping the guard on exit cancels a pending initial-load timer.
    let _mount = app.loading.mount();

    loop {
        app.sync();
        terminal.draw(|f| render(f, &app.dashboard))?;

        if event::poll(Duration::from_millis(UI_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                // Only quit is honoured on the skeleton screen.
                if app.dashboard.flags.initial_loading {
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                        break;
                    }
                    continue;
                }
                match app.dashboard.handle_key(key) {
                    KeyAction::Quit => break,
                    KeyAction::Refresh => app.start_refresh(),
                    KeyAction::Continue => {}
                }
            }
        }
        // Let timers and refresh tasks make progress between frames.
        tokio::task::yield_now().await;
    }

    app.shutdown();
    Ok(())
}

/// Skeleton screen until the initial load completes, the dashboard afterwards.
fn render(f: &mut Frame, state: &DashboardState) {
    if state.flags.initial_loading {
        render_skeleton_screen(f, &state.app_name, state.tick);
    } else {
        render_dashboard(f, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Source;
    use crate::loading::MockRefreshSource;
    use crate::logging::LogLevel;

    fn app(loading: LoadingState) -> (App, mpsc::Sender<DashboardEvent>) {
        let (sender, receiver) = mpsc::channel(8);
        let mut source = MockRefreshSource::new();
        source.expect_refresh().returning(|| Ok(()));
        let app = App::new(
            UIConfig::new("Analytics Dashboard", "1.0.0", Environment::Production),
            loading,
            receiver,
            Arc::new(source),
        );
        (app, sender)
    }

    #[tokio::test]
    async fn test_sync_pulls_events_and_flags() {
        let loading = LoadingState::default();
        let (mut app, sender) = app(loading.clone());
        sender
            .send(DashboardEvent::new(Source::App, "hello", LogLevel::Info))
            .await
            .unwrap();

        loading.set_refreshing(true);
        app.sync();
        assert_eq!(app.dashboard.activity_logs.len(), 1);
        assert!(app.dashboard.flags.refreshing);
        assert!(app.dashboard.flags.initial_loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_aborts_refreshes_and_clears_flag() {
        let loading = LoadingState::default();
        let (mut app, _sender) = app(loading.clone());
        app.refresh_source = Arc::new(crate::loading::SimulatedSource::new(
            Duration::from_secs(60),
            0.0,
        ));

        app.start_refresh();
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        assert!(loading.is_refreshing());

        app.shutdown();
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        assert!(!loading.is_refreshing());
        assert!(app.refresh_tasks.is_empty());
    }
}

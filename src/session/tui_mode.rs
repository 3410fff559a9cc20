//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::config::Config;
use crate::consts::cli_consts::table::{DEFAULT_PAGE_SIZE, NARROW_WIDTH};
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Build the UI configuration for a terminal `width` columns wide.
///
/// Narrow terminals (or `compact`) stack the panels and use the small page
/// size unless the config file picked a page size of its own.
pub fn ui_config_for(session: &SessionData, width: u16) -> UIConfig {
    let config: &Config = &session.config;
    let narrow = session.options.compact || config.compact || width < NARROW_WIDTH;
    let page_size = if narrow && config.page_size == DEFAULT_PAGE_SIZE {
        None
    } else {
        Some(config.page_size)
    };

    UIConfig {
        with_background_color: config.with_background_color && !session.options.no_background_color,
        narrow,
        page_size,
        export_dir: config.export_dir.clone(),
        ..UIConfig::new(
            config.app_name.clone(),
            config.display_version(),
            session.environment,
        )
    }
}

/// Runs the dashboard in TUI mode
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. UI application initialization and execution
/// 3. Proper shutdown handling
pub async fn run_tui_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    let app_name = session.config.app_name.clone();
    print_session_starting(&app_name, &session.environment.to_string());
    log::debug!("Activity log threshold: {:?}", session.log_level);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let ui_config = ui_config_for(&session, terminal.size()?.width);
    let app = ui::App::new(
        ui_config,
        session.loading,
        session.event_receiver,
        session.refresh_source,
    );

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle the result
    result?;

    print_session_shutdown();
    print_session_exit_success(&app_name);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::loading::{LoadingState, SimulatedSource};
    use crate::logging::LogLevel;
    use crate::session::StartOptions;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn session(config: Config, options: StartOptions) -> SessionData {
        let (_sender, event_receiver) = mpsc::channel(1);
        SessionData {
            event_receiver,
            loading: LoadingState::default(),
            refresh_source: Arc::new(SimulatedSource::default()),
            config,
            environment: Environment::Production,
            options,
            log_level: LogLevel::Info,
        }
    }

    #[test]
    fn test_narrow_terminal_uses_small_pages() {
        let session = session(Config::default(), StartOptions::default());
        let wide = ui_config_for(&session, 160);
        assert!(!wide.narrow);
        assert_eq!(wide.page_size, Some(DEFAULT_PAGE_SIZE));

        let narrow = ui_config_for(&session, NARROW_WIDTH - 1);
        assert!(narrow.narrow);
        assert_eq!(narrow.page_size, None);
    }

    #[test]
    fn test_explicit_page_size_survives_compact() {
        let config = Config {
            page_size: 20,
            ..Config::default()
        };
        let options = StartOptions {
            compact: true,
            no_background_color: true,
            ..StartOptions::default()
        };
        let ui_config = ui_config_for(&session(config, options), 160);
        assert!(ui_config.narrow);
        assert_eq!(ui_config.page_size, Some(20));
        assert!(!ui_config.with_background_color);
    }
}

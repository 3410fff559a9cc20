//! Session setup: event channel, logger and refresh source

use crate::config::Config;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::consts::cli_consts::loading;
use crate::environment::Environment;
use crate::events::Event;
use crate::loading::{LoadingState, RefreshSource, SimulatedSource};
use crate::logging::{LogLevel, get_rust_log_level, init_event_logger};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Options taken from the `start` command line.
#[derive(Debug, Clone, Default)]
pub struct StartOptions {
    /// Force the narrow layout regardless of terminal width.
    pub compact: bool,
    pub no_background_color: bool,
    /// Probability in `0..=1` that a simulated refresh fails.
    pub refresh_failure_rate: f64,
}

/// Everything the TUI needs to run one dashboard session.
pub struct SessionData {
    /// Activity events produced by the event logger
    pub event_receiver: mpsc::Receiver<Event>,
    pub loading: LoadingState,
    pub refresh_source: Arc<dyn RefreshSource>,
    pub config: Config,
    pub environment: Environment,
    pub options: StartOptions,
    /// Activity-log threshold in effect
    pub log_level: LogLevel,
}

/// Sets up a dashboard session.
///
/// Installs the event logger as the global `log` backend, so this must be
/// called at most once per process.
pub fn setup_session(
    config: Config,
    environment: Environment,
    options: StartOptions,
) -> Result<SessionData, Box<dyn Error>> {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);

    let log_level = get_rust_log_level(environment.default_log_level());
    init_event_logger(event_sender, log_level)?;

    let refresh_source: Arc<dyn RefreshSource> = Arc::new(SimulatedSource::new(
        loading::refresh(),
        options.refresh_failure_rate,
    ));

    Ok(SessionData {
        event_receiver,
        loading: LoadingState::default(),
        refresh_source,
        config,
        environment,
        options,
        log_level,
    })
}

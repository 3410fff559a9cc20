//! Loading and refresh state
//!
//! Two independent flags drive the skeleton presentation:
//! `initial_loading` starts true and drops to false once, after a fixed
//! delay, when the dashboard is mounted; `refreshing` is raised for the
//! duration of each refresh call. Flags are published through a watch
//! channel so any number of views can subscribe to changes.

use crate::consts::cli_consts::loading;
use crate::events::targets;
use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LoadingFlags {
    pub initial_loading: bool,
    pub refreshing: bool,
}

impl LoadingFlags {
    /// The initial load has finished; content may be shown.
    pub fn is_ready(&self) -> bool {
        !self.initial_loading
    }

    /// Either flag is raised and skeletons should be drawn.
    pub fn is_loading(&self) -> bool {
        self.initial_loading || self.refreshing
    }
}

impl Default for LoadingFlags {
    fn default() -> Self {
        Self {
            initial_loading: true,
            refreshing: false,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RefreshError {
    /// The simulated backing call failed.
    #[error("simulated refresh failure: {0}")]
    Simulated(String),
}

/// The backing call awaited by a refresh.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RefreshSource: Send + Sync {
    async fn refresh(&self) -> Result<(), RefreshError>;
}

/// Stand-in for a backend: waits a fixed delay, then fails at `failure_rate`.
#[derive(Debug, Clone)]
pub struct SimulatedSource {
    delay: Duration,
    failure_rate: f64,
}

impl SimulatedSource {
    pub fn new(delay: Duration, failure_rate: f64) -> Self {
        let failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };
        Self {
            delay,
            failure_rate,
        }
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new(loading::refresh(), 0.0)
    }
}

#[async_trait]
impl RefreshSource for SimulatedSource {
    async fn refresh(&self) -> Result<(), RefreshError> {
        tokio::time::sleep(self.delay).await;
        if rand::thread_rng().gen_bool(self.failure_rate) {
            return Err(RefreshError::Simulated("backend unavailable".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug)]
struct Shared {
    flags: watch::Sender<LoadingFlags>,
    mounted: AtomicBool,
}

/// Shared loading state. Cloning yields another handle to the same flags.
#[derive(Debug, Clone)]
pub struct LoadingState {
    shared: Arc<Shared>,
    initial_delay: Duration,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new(loading::initial_load())
    }
}

impl LoadingState {
    pub fn new(initial_delay: Duration) -> Self {
        let (flags, _) = watch::channel(LoadingFlags::default());
        Self {
            shared: Arc::new(Shared {
                flags,
                mounted: AtomicBool::new(false),
            }),
            initial_delay,
        }
    }

    /// Receiver notified on every flag change.
    pub fn subscribe(&self) -> watch::Receiver<LoadingFlags> {
        self.shared.flags.subscribe()
    }

    pub fn snapshot(&self) -> LoadingFlags {
        *self.shared.flags.borrow()
    }

    pub fn is_initial_loading(&self) -> bool {
        self.snapshot().initial_loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.snapshot().refreshing
    }

    pub fn set_refreshing(&self, refreshing: bool) {
        self.shared.flags.send_if_modified(|flags| {
            let changed = flags.refreshing != refreshing;
            flags.refreshing = refreshing;
            changed
        });
    }

    fn finish_initial_load(&self) {
        self.shared.flags.send_if_modified(|flags| {
            let changed = flags.initial_loading;
            flags.initial_loading = false;
            changed
        });
    }

    /// Start the initial-load timer. Only the first call per state starts a
    /// timer; later calls return an inert guard. Dropping the guard before
    /// the delay elapses cancels the timer.
    pub fn mount(&self) -> MountGuard {
        if self.shared.mounted.swap(true, Ordering::SeqCst) {
            return MountGuard { timer: None };
        }
        let state = self.clone();
        let delay = self.initial_delay;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.finish_initial_load();
            log::info!(target: targets::LOADING, "Dashboard ready");
        });
        MountGuard { timer: Some(timer) }
    }

    /// Raise `refreshing`, await `source`, then clear `refreshing`.
    ///
    /// A failing source is logged and swallowed. The flag is cleared even if
    /// the future is dropped part-way. Overlapping calls are not coordinated:
    /// the first to finish clears the flag for all of them.
    pub async fn refresh(&self, source: &dyn RefreshSource) {
        let _clear = RefreshingGuard::raise(self.clone());
        log::debug!(target: targets::REFRESH, "Refreshing charts");

        match source.refresh().await {
            Ok(()) => log::info!(target: targets::REFRESH, "Charts refreshed"),
            Err(e) => log::warn!(target: targets::REFRESH, "Chart refresh failed: {}", e),
        }
    }

    /// Run [`LoadingState::refresh`] on a background task.
    ///
    /// `refreshing` is raised before this returns, not when the task is
    /// first polled, and is cleared if the task is aborted before it runs.
    pub fn spawn_refresh(&self, source: Arc<dyn RefreshSource>) -> JoinHandle<()> {
        let state = self.clone();
        let raised = RefreshingGuard::raise(self.clone());
        tokio::spawn(async move {
            let _raised = raised;
            state.refresh(source.as_ref()).await
        })
    }
}

/// Holds `refreshing` up until dropped.
struct RefreshingGuard {
    state: LoadingState,
}

impl RefreshingGuard {
    fn raise(state: LoadingState) -> Self {
        state.set_refreshing(true);
        Self { state }
    }
}

impl Drop for RefreshingGuard {
    fn drop(&mut self) {
        self.state.set_refreshing(false);
    }
}

/// Owns the pending initial-load timer.
#[derive(Debug)]
pub struct MountGuard {
    timer: Option<JoinHandle<()>>,
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{Instant, advance, sleep};

    const INITIAL: Duration = Duration::from_millis(1_500);
    const REFRESH: Duration = Duration::from_millis(1_000);

    async fn settle() {
        // Let spawned tasks observe the advanced clock.
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_loading_clears_once_after_delay() {
        let state = LoadingState::new(INITIAL);
        let mut changes = state.subscribe();
        assert!(state.is_initial_loading());

        let _guard = state.mount();
        advance(INITIAL - Duration::from_millis(1)).await;
        settle().await;
        assert!(state.is_initial_loading());

        advance(Duration::from_millis(1)).await;
        settle().await;
        assert!(!state.is_initial_loading());
        assert!(changes.has_changed().unwrap());
        assert!(!changes.borrow_and_update().initial_loading);

        // A second mount never brings the flag back.
        let _second = state.mount();
        advance(INITIAL * 2).await;
        settle().await;
        assert!(!state.is_initial_loading());
        assert!(!changes.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_mount_guard_cancels_timer() {
        let state = LoadingState::new(INITIAL);
        let guard = state.mount();
        advance(Duration::from_millis(500)).await;
        drop(guard);

        advance(INITIAL).await;
        settle().await;
        assert!(state.is_initial_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_sets_flag_then_clears_after_delay() {
        let state = LoadingState::new(INITIAL);
        let source: Arc<dyn RefreshSource> = Arc::new(SimulatedSource::new(REFRESH, 0.0));

        let started = Instant::now();
        let handle = state.spawn_refresh(source);
        assert!(state.is_refreshing());

        advance(REFRESH - Duration::from_millis(1)).await;
        settle().await;
        assert!(state.is_refreshing());

        handle.await.unwrap();
        assert!(!state.is_refreshing());
        assert_eq!(started.elapsed(), REFRESH);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_clears_flag_when_source_fails() {
        let state = LoadingState::new(INITIAL);
        let source: Arc<dyn RefreshSource> = Arc::new(SimulatedSource::new(REFRESH, 1.0));

        let handle = state.spawn_refresh(source);
        settle().await;
        assert!(state.is_refreshing());

        handle.await.unwrap();
        assert!(!state.is_refreshing());
    }

    #[tokio::test]
    async fn test_refresh_awaits_source_once() {
        let state = LoadingState::new(INITIAL);
        let mut source = MockRefreshSource::new();
        source
            .expect_refresh()
            .times(1)
            .returning(|| Err(RefreshError::Simulated("boom".to_string())));

        state.refresh(&source).await;
        assert!(!state.is_refreshing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_aborted_refresh_clears_flag() {
        let state = LoadingState::new(INITIAL);
        let source: Arc<dyn RefreshSource> = Arc::new(SimulatedSource::new(REFRESH, 0.0));

        let handle = state.spawn_refresh(source);
        settle().await;
        assert!(state.is_refreshing());

        handle.abort();
        let _ = handle.await;
        assert!(!state.is_refreshing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_aborted_before_first_poll_clears_flag() {
        let state = LoadingState::new(INITIAL);
        let source: Arc<dyn RefreshSource> = Arc::new(SimulatedSource::new(REFRESH, 0.0));

        let handle = state.spawn_refresh(source);
        assert!(state.is_refreshing());

        handle.abort();
        let _ = handle.await;
        assert!(!state.is_refreshing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_refreshes_first_finisher_clears_flag() {
        let state = LoadingState::new(INITIAL);
        let source: Arc<dyn RefreshSource> = Arc::new(SimulatedSource::new(REFRESH, 0.0));

        let first = state.spawn_refresh(source.clone());
        settle().await;
        sleep(Duration::from_millis(400)).await;
        let second = state.spawn_refresh(source);
        settle().await;
        assert!(state.is_refreshing());

        first.await.unwrap();
        assert!(!state.is_refreshing());

        second.await.unwrap();
        assert!(!state.is_refreshing());
    }
}

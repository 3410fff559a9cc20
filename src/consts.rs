pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Timing, layout and queue constants, grouped by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Capacity of the channel carrying log events into the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // LOADING CONFIGURATION
    // =============================================================================

    /// Simulated loading delays
    pub mod loading {
        use std::time::Duration;

        /// Delay before the initial skeleton gives way to the dashboard (milliseconds)
        pub const INITIAL_LOAD_MS: u64 = 1_500;

        /// Simulated backing call duration for a chart refresh (milliseconds)
        pub const REFRESH_MS: u64 = 1_000;

        pub const fn initial_load() -> Duration {
            Duration::from_millis(INITIAL_LOAD_MS)
        }

        pub const fn refresh() -> Duration {
            Duration::from_millis(REFRESH_MS)
        }
    }

    // =============================================================================
    // METRIC CARD ANIMATION
    // =============================================================================

    /// Progress ring animation timing
    pub mod animation {
        use std::time::Duration;

        /// Delay after the cards appear before progress starts moving
        pub const START_DELAY: Duration = Duration::from_millis(200);

        /// Extra delay per card, so cards fill one after another
        pub const STAGGER: Duration = Duration::from_millis(150);

        /// Time for a ring to travel from 0 to its target
        pub const DURATION: Duration = Duration::from_millis(2_000);
    }

    // =============================================================================
    // TABLE CONFIGURATION
    // =============================================================================

    pub mod table {
        /// Rows per page offered by the page-size selector
        pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 20, 30, 50];

        /// Rows per page on a regular terminal
        pub const DEFAULT_PAGE_SIZE: usize = 10;

        /// Rows per page in the narrow layout
        pub const NARROW_PAGE_SIZE: usize = 5;

        /// Terminals narrower than this many columns use the narrow layout
        pub const NARROW_WIDTH: u16 = 100;

        /// Placeholder rows drawn while the table is loading
        pub const SKELETON_ROWS: usize = 10;
    }

    // =============================================================================
    // UI LOOP
    // =============================================================================

    /// How long the UI waits for a key press before redrawing (milliseconds)
    pub const UI_POLL_MS: u64 = 100;
}

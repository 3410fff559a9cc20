//! Metric card progress animation.

use crate::consts::cli_consts::animation::{DURATION, START_DELAY, STAGGER};
use std::time::Duration;

/// Progress shown by card `index` after the cards have been visible for
/// `since_visible`.
///
/// Stays at 0 until the card's start delay has passed, then eases out toward
/// `target` (clamped to 100), never overshooting it.
pub fn animated_progress(target: u16, since_visible: Duration, index: usize) -> u16 {
    let target = target.min(100);
    let start = START_DELAY + STAGGER * index as u32;
    let Some(elapsed) = since_visible.checked_sub(start) else {
        return 0;
    };
    let t = (elapsed.as_secs_f64() / DURATION.as_secs_f64()).min(1.0);
    let eased = 1.0 - (1.0 - t).powi(3);
    ((f64::from(target) * eased).round() as u16).min(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_before_start_delay() {
        assert_eq!(animated_progress(75, Duration::ZERO, 0), 0);
        assert_eq!(animated_progress(75, Duration::from_millis(199), 0), 0);
        // Second card waits for its stagger.
        assert_eq!(animated_progress(75, Duration::from_millis(300), 1), 0);
    }

    #[test]
    fn test_reaches_target_and_stops() {
        let done = START_DELAY + DURATION;
        assert_eq!(animated_progress(75, done, 0), 75);
        assert_eq!(animated_progress(75, done * 3, 0), 75);
    }

    #[test]
    fn test_monotonic_and_bounded() {
        let mut previous = 0;
        for ms in (0..3_000).step_by(50) {
            let value = animated_progress(62, Duration::from_millis(ms), 2);
            assert!(value >= previous);
            assert!(value <= 62);
            previous = value;
        }
    }

    #[test]
    fn test_target_clamped_to_hundred() {
        assert_eq!(animated_progress(250, Duration::from_secs(10), 0), 100);
    }
}

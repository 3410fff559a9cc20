//! Chart widgets
//!
//! Each chart validates its input and returns a [`ChartError`] instead of
//! drawing something misleading; the caller wraps it in a render boundary.

pub mod bar;
pub mod donut;
pub mod line;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("no data points")]
    Empty,

    #[error("{series} contains a non-finite value")]
    NonFinite { series: &'static str },

    #[error("traffic shares must add up to a positive total")]
    NonPositiveTotal,
}

/// Reject series containing NaN or infinite values.
fn ensure_finite(series: &'static str, values: impl IntoIterator<Item = f64>) -> Result<(), ChartError> {
    if values.into_iter().all(f64::is_finite) {
        Ok(())
    } else {
        Err(ChartError::NonFinite { series })
    }
}

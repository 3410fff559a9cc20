// Module declarations
pub mod animation;
pub mod app;
pub mod boundary;
pub mod dashboard;
pub mod skeleton;
// Re-exports for external use
pub use app::{App, UIConfig, run};

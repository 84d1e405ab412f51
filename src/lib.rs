//! Local HTTP dashboard over `brew services`.
//!
//! [`app::router`] wires the routes onto a [`app::supervisor::ServiceManager`],
//! which the binary backs with the real `brew` and tests back with fakes.

pub mod app;
pub mod config;
pub mod telemetry;

pub use app::{AppState, router};
pub use config::Config;

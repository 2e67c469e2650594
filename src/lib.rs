//! Planboard
//!
//! An HTTP service tracking epics (work items) and teams (owning groups).
//! The relationship between them is stored on both sides (`Epic.team` and
//! `Team.epics`) and kept consistent by a dedicated linkage layer running
//! under a single store-wide lock.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use api::{create_router, AppState};
pub use config::AppConfig;

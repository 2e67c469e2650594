//! API layer - HTTP endpoints

pub mod epics;
pub mod health;
pub mod router;
pub mod state;
pub mod teams;
pub mod types;

pub use router::create_router;
pub use state::AppState;

//! Infrastructure layer - store, relationship maintenance, services

pub mod linkage;
pub mod logging;
pub mod services;
pub mod store;

pub use services::{EpicService, TeamService};
pub use store::{PlanState, PlanStore};

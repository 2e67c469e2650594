//! Entity services

pub mod epic;
pub mod team;

pub use epic::EpicService;
pub use team::TeamService;

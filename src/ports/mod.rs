//! Port traits for external collaborators.

pub mod config_port;
pub mod returns_port;
pub mod report_port;

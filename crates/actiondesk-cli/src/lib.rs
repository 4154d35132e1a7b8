//! CLI library components for actiondesk.

pub mod logging;
pub mod summary;

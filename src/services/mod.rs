//! External Services
//!
//! Boundaries to the data store and the report generator, each behind a
//! trait so views receive them as injected dependencies.

mod data;
mod report;

pub use data::*;
pub use report::*;

//! cashflow-core
//!
//! Projection and aggregation logic for the cash-flow calendar.
//! Depends on cashflow-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod dates;
pub mod error;
pub mod format;
pub mod projection_service;
pub mod source;
pub mod summary_service;
pub mod time;
pub mod validation;
pub mod view;

#[cfg(test)]
mod tests;

pub use dates::*;
pub use error::CoreError;
pub use format::*;
pub use projection_service::*;
pub use source::EntrySource;
pub use summary_service::*;
pub use time::*;
pub use validation::*;
pub use view::*;

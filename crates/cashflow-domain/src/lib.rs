//! cashflow-domain
//!
//! Pure domain models (Entry, CashflowDocument, Projection, Summary) and their enums.
//! No I/O, no CLI, no storage. Only data types.

pub mod common;
pub mod document;
pub mod entry;
pub mod projection;

pub use common::*;
pub use document::*;
pub use entry::*;
pub use projection::*;

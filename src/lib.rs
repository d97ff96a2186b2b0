#![doc(test(attr(deny(warnings))))]

//! Cash Flow Calendar projects a starting balance forward through dated
//! income, outgoings and events, and renders the timeline for the terminal.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cash flow calendar tracing initialized.");
    });
}

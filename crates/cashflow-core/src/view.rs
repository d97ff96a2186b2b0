//! Memoizing front for the projection and summary services.

use cashflow_domain::{CertaintyFilter, Entry, Projection, Summary};
use tracing::debug;

use crate::{projection_service::ProjectionService, summary_service::SummaryService};

/// Holds the three dashboard inputs and caches what is derived from them.
///
/// The projection depends on entries, starting balance and filter; the summary
/// depends on entries and starting balance only, so toggling the filter never
/// touches it.
#[derive(Debug, Clone)]
pub struct CashflowView {
    entries: Vec<Entry>,
    starting_balance: f64,
    filter: CertaintyFilter,
    projection: Option<Vec<Projection>>,
    summary: Option<Summary>,
}

impl CashflowView {
    pub fn new(entries: Vec<Entry>, starting_balance: f64) -> Self {
        Self {
            entries,
            starting_balance,
            filter: CertaintyFilter::default(),
            projection: None,
            summary: None,
        }
    }

    pub fn with_filter(mut self, filter: CertaintyFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn starting_balance(&self) -> f64 {
        self.starting_balance
    }

    pub fn filter(&self) -> CertaintyFilter {
        self.filter
    }

    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.projection = None;
        self.summary = None;
    }

    pub fn set_starting_balance(&mut self, starting_balance: f64) {
        if self.starting_balance.to_bits() == starting_balance.to_bits() {
            return;
        }
        self.starting_balance = starting_balance;
        self.projection = None;
        self.summary = None;
    }

    pub fn set_filter(&mut self, filter: CertaintyFilter) {
        if self.filter == filter {
            return;
        }
        self.filter = filter;
        self.projection = None;
    }

    pub fn projection(&mut self) -> &[Projection] {
        if self.projection.is_some() {
            debug!("projection cache hit");
        }
        let (entries, balance, filter) = (&self.entries, self.starting_balance, self.filter);
        self.projection
            .get_or_insert_with(|| ProjectionService::project(entries, balance, filter))
    }

    pub fn summary(&mut self) -> &Summary {
        if self.summary.is_some() {
            debug!("summary cache hit");
        }
        let (entries, balance) = (&self.entries, self.starting_balance);
        self.summary
            .get_or_insert_with(|| SummaryService::summarize(entries, balance))
    }

    pub fn is_projection_cached(&self) -> bool {
        self.projection.is_some()
    }

    pub fn is_summary_cached(&self) -> bool {
        self.summary.is_some()
    }
}

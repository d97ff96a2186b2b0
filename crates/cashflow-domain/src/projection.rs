//! Derived, read-only values produced from a set of entries.

use serde::Serialize;

use crate::entry::Entry;

/// An entry annotated with the balance after its own effect is applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    #[serde(flatten)]
    pub entry: Entry,
    pub running_balance: f64,
}

/// Headline statistics over the full, unfiltered entry set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_out: f64,
    pub total_in_high_certainty: f64,
    pub total_in_all: f64,
    pub net_position_high: f64,
    pub net_position_all: f64,
    pub next_critical: Option<Entry>,
}

/// Display toggle selecting which entries feed the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CertaintyFilter {
    #[default]
    All,
    HighOnly,
}

impl CertaintyFilter {
    pub fn from_high_only(high_only: bool) -> Self {
        if high_only {
            CertaintyFilter::HighOnly
        } else {
            CertaintyFilter::All
        }
    }

    pub fn admits(self, entry: &Entry) -> bool {
        match self {
            CertaintyFilter::All => true,
            CertaintyFilter::HighOnly => entry.is_high_certainty(),
        }
    }
}

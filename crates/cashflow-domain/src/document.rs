use serde::Serialize;

use crate::entry::Entry;

/// Validated contents of one entry source: the opening balance and its entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashflowDocument {
    pub starting_balance: f64,
    pub entries: Vec<Entry>,
}

impl CashflowDocument {
    pub fn new(starting_balance: f64, entries: Vec<Entry>) -> Self {
        Self {
            starting_balance,
            entries,
        }
    }
}

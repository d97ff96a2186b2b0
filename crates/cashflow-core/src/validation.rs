//! Eager validation of untyped source records into domain entries.

use cashflow_domain::{Certainty, Entry, EntryKind, EntryStatus};
use serde::Deserialize;

use crate::{dates::parse_entry_date, CoreError};

/// Entry record exactly as it arrives from a data source, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawEntry {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub amount: f64,
    pub status: String,
    pub certainty: String,
}

/// Converts every record or rejects the batch at the first invalid one.
pub fn validate_entries(records: &[RawEntry]) -> Result<Vec<Entry>, CoreError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| validate_entry(index, record))
        .collect()
}

pub fn validate_entry(index: usize, record: &RawEntry) -> Result<Entry, CoreError> {
    let date = parse_entry_date(&record.date).ok_or_else(|| {
        CoreError::invalid_entry(index, "date", format!("`{}` is not a date", record.date))
    })?;
    let kind: EntryKind = record
        .kind
        .parse()
        .map_err(|err| CoreError::invalid_entry(index, "type", format!("{err}")))?;
    let status: EntryStatus = record
        .status
        .parse()
        .map_err(|err| CoreError::invalid_entry(index, "status", format!("{err}")))?;
    let certainty: Certainty = record
        .certainty
        .parse()
        .map_err(|err| CoreError::invalid_entry(index, "certainty", format!("{err}")))?;

    if !record.amount.is_finite() {
        return Err(CoreError::invalid_entry(index, "amount", "must be a finite number"));
    }
    if record.amount < 0.0 {
        return Err(CoreError::invalid_entry(
            index,
            "amount",
            format!("must not be negative (got {})", record.amount),
        ));
    }

    Ok(Entry {
        date,
        kind,
        description: record.description.clone(),
        amount: record.amount,
        status,
        certainty,
    })
}

pub fn validate_starting_balance(balance: f64) -> Result<f64, CoreError> {
    if balance.is_finite() {
        Ok(balance)
    } else {
        Err(CoreError::InvalidStartingBalance(balance))
    }
}

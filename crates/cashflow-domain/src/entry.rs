//! Domain model for dated cash-flow entries.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::UnknownVariant;

/// A single dated item on the cash-flow calendar.
///
/// Entries are read-only once constructed; projections and summaries are
/// always derived as new values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub description: String,
    pub amount: f64,
    pub status: EntryStatus,
    pub certainty: Certainty,
}

impl Entry {
    pub fn new(
        date: NaiveDate,
        kind: EntryKind,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date,
            kind,
            description: description.into(),
            amount,
            status: EntryStatus::Pending,
            certainty: Certainty::Complete,
        }
    }

    pub fn with_status(mut self, status: EntryStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_certainty(mut self, certainty: Certainty) -> Self {
        self.certainty = certainty;
        self
    }

    /// Balance change this entry applies when folded into a projection.
    pub fn signed_amount(&self) -> f64 {
        self.kind.signed_effect(self.amount)
    }

    pub fn is_high_certainty(&self) -> bool {
        self.certainty.is_high()
    }

    /// Outgoing obligation still awaiting payment.
    pub fn is_critical(&self) -> bool {
        self.kind == EntryKind::Out && self.status == EntryStatus::Due
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Direction of an entry's effect on the balance.
pub enum EntryKind {
    In,
    Out,
    Event,
}

impl EntryKind {
    /// Applies the direction to a non-negative magnitude.
    pub fn signed_effect(self, amount: f64) -> f64 {
        match self {
            EntryKind::In => amount,
            EntryKind::Out => -amount,
            EntryKind::Event => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::In => "in",
            EntryKind::Out => "out",
            EntryKind::Event => "event",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "in" => Ok(EntryKind::In),
            "out" => Ok(EntryKind::Out),
            "event" => Ok(EntryKind::Event),
            other => Err(UnknownVariant::new("type", other, "in, out, event")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Settlement state of an entry. Not used in balance math.
pub enum EntryStatus {
    Received,
    Pending,
    Due,
}

impl EntryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryStatus::Received => "received",
            EntryStatus::Pending => "pending",
            EntryStatus::Due => "due",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryStatus {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "received" => Ok(EntryStatus::Received),
            "pending" => Ok(EntryStatus::Pending),
            "due" => Ok(EntryStatus::Due),
            other => Err(UnknownVariant::new(
                "status",
                other,
                "received, pending, due",
            )),
        }
    }
}

/// Confidence that an entry materializes as stated.
///
/// Variants are declared from least to most confident so the derived
/// ordering gives `Complete > High > Medium > Low`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Certainty {
    Low,
    Medium,
    High,
    Complete,
}

impl Certainty {
    /// `Complete` and `High` together form the "high certainty" band.
    pub fn is_high(self) -> bool {
        self >= Certainty::High
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Certainty::Low => "low",
            Certainty::Medium => "medium",
            Certainty::High => "high",
            Certainty::Complete => "complete",
        }
    }
}

impl fmt::Display for Certainty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Certainty {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "complete" => Ok(Certainty::Complete),
            "high" => Ok(Certainty::High),
            "medium" => Ok(Certainty::Medium),
            "low" => Ok(Certainty::Low),
            other => Err(UnknownVariant::new(
                "certainty",
                other,
                "complete, high, medium, low",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn signed_amount_follows_kind() {
        assert_eq!(Entry::new(day(1), EntryKind::In, "Grant", 250.0).signed_amount(), 250.0);
        assert_eq!(Entry::new(day(1), EntryKind::Out, "Feed", 80.0).signed_amount(), -80.0);
        assert_eq!(Entry::new(day(1), EntryKind::Event, "Audit", 999.0).signed_amount(), 0.0);
    }

    #[test]
    fn certainty_orders_by_confidence() {
        assert!(Certainty::Complete > Certainty::High);
        assert!(Certainty::High > Certainty::Medium);
        assert!(Certainty::Medium > Certainty::Low);
        assert!(Certainty::Complete.is_high());
        assert!(Certainty::High.is_high());
        assert!(!Certainty::Medium.is_high());
        assert!(!Certainty::Low.is_high());
    }

    #[test]
    fn critical_means_outgoing_and_due() {
        let due = Entry::new(day(2), EntryKind::Out, "Rent", 600.0).with_status(EntryStatus::Due);
        let pending = Entry::new(day(2), EntryKind::Out, "Vet", 90.0);
        let incoming_due =
            Entry::new(day(2), EntryKind::In, "Invoice", 90.0).with_status(EntryStatus::Due);
        assert!(due.is_critical());
        assert!(!pending.is_critical());
        assert!(!incoming_due.is_critical());
    }

    #[test]
    fn enums_parse_wire_tokens() {
        assert_eq!("out".parse::<EntryKind>(), Ok(EntryKind::Out));
        assert_eq!("received".parse::<EntryStatus>(), Ok(EntryStatus::Received));
        assert_eq!("medium".parse::<Certainty>(), Ok(Certainty::Medium));

        let err = "transfer".parse::<EntryKind>().unwrap_err();
        assert_eq!(err.kind, "type");
        assert!(err.to_string().contains("transfer"));
    }

    #[test]
    fn entry_uses_type_key_on_the_wire() {
        let entry = Entry::new(day(4), EntryKind::Out, "Diesel", 120.0)
            .with_status(EntryStatus::Due)
            .with_certainty(Certainty::High);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "out");
        assert_eq!(json["status"], "due");
        assert_eq!(json["certainty"], "high");
        assert_eq!(json["date"], "2025-03-04");
    }
}

use cashflow_domain::{Entry, EntryKind, Summary};
use tracing::debug;

pub struct SummaryService;

impl SummaryService {
    /// Computes headline figures over the full entry set.
    ///
    /// Display filters never reach this function: outflow is counted at every
    /// certainty, and the two net positions bracket the expected inflow.
    pub fn summarize(entries: &[Entry], starting_balance: f64) -> Summary {
        let total_out = Self::total_where(entries, |entry| entry.kind == EntryKind::Out);
        let total_in_high_certainty = Self::total_where(entries, |entry| {
            entry.kind == EntryKind::In && entry.is_high_certainty()
        });
        let total_in_all = Self::total_where(entries, |entry| entry.kind == EntryKind::In);
        let next_critical = Self::next_critical(entries).cloned();

        debug!(
            entries = entries.len(),
            total_out,
            total_in_all,
            has_critical = next_critical.is_some(),
            "summarized entries"
        );

        Summary {
            total_out,
            total_in_high_certainty,
            total_in_all,
            net_position_high: starting_balance + total_in_high_certainty - total_out,
            net_position_all: starting_balance + total_in_all - total_out,
            next_critical,
        }
    }

    /// Earliest outgoing entry still marked due; the first listed wins on equal dates.
    pub fn next_critical(entries: &[Entry]) -> Option<&Entry> {
        entries
            .iter()
            .filter(|entry| entry.is_critical())
            .min_by_key(|entry| entry.date)
    }

    /// Adds matching amounts smallest first so the total does not depend on
    /// input order. Starts from `+0.0`; an empty `f64` sum would yield `-0.0`.
    fn total_where(entries: &[Entry], predicate: impl Fn(&Entry) -> bool) -> f64 {
        let mut amounts: Vec<f64> = entries
            .iter()
            .filter(|entry| predicate(entry))
            .map(|entry| entry.amount)
            .collect();
        amounts.sort_by(f64::total_cmp);
        amounts.into_iter().fold(0.0, |total, amount| total + amount)
    }
}

//! Running-balance projection over a chronologically ordered entry set.

use cashflow_domain::{CertaintyFilter, Entry, Projection};
use tracing::debug;

pub struct ProjectionService;

impl ProjectionService {
    /// Sorts entries by date (stable on ties), keeps those admitted by `filter`
    /// and folds them from `starting_balance`.
    ///
    /// Each projection carries the balance after its own entry is applied.
    pub fn project(
        entries: &[Entry],
        starting_balance: f64,
        filter: CertaintyFilter,
    ) -> Vec<Projection> {
        let mut ordered: Vec<&Entry> = entries.iter().collect();
        ordered.sort_by_key(|entry| entry.date);

        let mut balance = starting_balance;
        let projections: Vec<Projection> = ordered
            .into_iter()
            .filter(|entry| filter.admits(entry))
            .map(|entry| {
                balance += entry.signed_amount();
                Projection {
                    entry: entry.clone(),
                    running_balance: balance,
                }
            })
            .collect();

        debug!(
            input = entries.len(),
            projected = projections.len(),
            ?filter,
            "projected running balance"
        );
        projections
    }

    /// Balance after the final projected entry, or the starting balance when nothing was projected.
    pub fn closing_balance(projections: &[Projection], starting_balance: f64) -> f64 {
        projections
            .last()
            .map(|projection| projection.running_balance)
            .unwrap_or(starting_balance)
    }

    /// Earliest projection holding the minimum running balance.
    pub fn lowest_point(projections: &[Projection]) -> Option<&Projection> {
        projections.iter().fold(None, |lowest, candidate| match lowest {
            Some(current) if current.running_balance <= candidate.running_balance => {
                Some(current)
            }
            _ => Some(candidate),
        })
    }
}

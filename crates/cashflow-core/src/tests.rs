use chrono::{Duration, NaiveDate};

use crate::{
    dates::{days_label, days_until},
    projection_service::ProjectionService,
    summary_service::SummaryService,
    time::FixedClock,
};
use cashflow_domain::{Certainty, CertaintyFilter, Entry, EntryKind, EntryStatus};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 14).unwrap()
}

fn farm_entries() -> Vec<Entry> {
    let at = |offset: i64| today() + Duration::days(offset);
    vec![
        Entry::new(at(12), EntryKind::Out, "Machinery loan", 1_450.0)
            .with_status(EntryStatus::Due),
        Entry::new(at(-2), EntryKind::In, "Lamb sale", 2_300.0)
            .with_status(EntryStatus::Received),
        Entry::new(at(3), EntryKind::Event, "Shearing contractor booked", 0.0),
        Entry::new(at(5), EntryKind::In, "Wool cheque", 640.0).with_certainty(Certainty::Medium),
        Entry::new(at(5), EntryKind::Out, "Feed merchant", 380.0)
            .with_status(EntryStatus::Due)
            .with_certainty(Certainty::High),
        Entry::new(at(21), EntryKind::In, "Stewardship payment", 1_800.0)
            .with_certainty(Certainty::High),
        Entry::new(at(30), EntryKind::In, "Hay surplus", 250.0).with_certainty(Certainty::Low),
        Entry::new(at(40), EntryKind::Out, "Insurance", 520.0).with_certainty(Certainty::Low),
    ]
}

fn net_of(entries: &[Entry]) -> f64 {
    entries.iter().map(Entry::signed_amount).sum()
}

#[test]
fn scenario_two_entries() {
    let clock = FixedClock::new(today());
    let entries = vec![
        Entry::new(today() + Duration::days(2), EntryKind::In, "Invoice", 500.0)
            .with_certainty(Certainty::High)
            .with_status(EntryStatus::Pending),
        Entry::new(today() + Duration::days(5), EntryKind::Out, "Rates", 300.0)
            .with_certainty(Certainty::Complete)
            .with_status(EntryStatus::Due),
    ];

    let summary = SummaryService::summarize(&entries, 1_000.0);
    assert_eq!(summary.total_out, 300.0);
    assert_eq!(summary.total_in_high_certainty, 500.0);
    assert_eq!(summary.total_in_all, 500.0);
    assert_eq!(summary.net_position_high, 1_200.0);
    assert_eq!(summary.net_position_all, 1_200.0);
    let critical = summary.next_critical.expect("critical entry");
    assert_eq!(critical, entries[1]);
    assert_eq!(days_label(days_until(critical.date, &clock)), "5d");

    let balances: Vec<f64> = ProjectionService::project(&entries, 1_000.0, CertaintyFilter::All)
        .iter()
        .map(|p| p.running_balance)
        .collect();
    assert_eq!(balances, vec![1_500.0, 1_200.0]);
}

#[test]
fn scenario_empty_entries() {
    let summary = SummaryService::summarize(&[], 750.0);
    assert_eq!(summary.total_out, 0.0);
    assert_eq!(summary.total_in_high_certainty, 0.0);
    assert_eq!(summary.total_in_all, 0.0);
    assert_eq!(summary.net_position_high, 750.0);
    assert_eq!(summary.net_position_all, 750.0);
    assert!(summary.next_critical.is_none());

    for filter in [CertaintyFilter::All, CertaintyFilter::HighOnly] {
        assert!(ProjectionService::project(&[], 750.0, filter).is_empty());
    }
}

#[test]
fn projection_is_sorted_and_never_longer_than_input() {
    let entries = farm_entries();
    for filter in [CertaintyFilter::All, CertaintyFilter::HighOnly] {
        let projections = ProjectionService::project(&entries, 200.0, filter);
        assert!(projections.len() <= entries.len());
        assert!(projections
            .windows(2)
            .all(|pair| pair[0].entry.date <= pair[1].entry.date));
    }
}

#[test]
fn closing_balance_equals_start_plus_filtered_net() {
    let entries = farm_entries();
    for filter in [CertaintyFilter::All, CertaintyFilter::HighOnly] {
        let projections = ProjectionService::project(&entries, 200.0, filter);
        let retained: Vec<Entry> = entries
            .iter()
            .filter(|entry| filter.admits(entry))
            .cloned()
            .collect();
        let expected = 200.0 + net_of(&retained);
        assert_eq!(
            ProjectionService::closing_balance(&projections, 200.0),
            expected
        );
    }
}

#[test]
fn summary_ignores_input_order() {
    let entries = farm_entries();
    let baseline = SummaryService::summarize(&entries, 200.0);

    let mut reversed = entries.clone();
    reversed.reverse();
    assert_eq!(SummaryService::summarize(&reversed, 200.0), baseline);

    let mut rotated = entries;
    rotated.rotate_left(3);
    assert_eq!(SummaryService::summarize(&rotated, 200.0), baseline);
}

#[test]
fn summary_reflects_unfiltered_set_and_orders_net_positions() {
    let entries = farm_entries();
    let summary = SummaryService::summarize(&entries, 200.0);

    assert_eq!(summary.total_out, 1_450.0 + 380.0 + 520.0);
    assert_eq!(summary.total_in_high_certainty, 2_300.0 + 1_800.0);
    assert_eq!(summary.total_in_all, 2_300.0 + 640.0 + 1_800.0 + 250.0);
    assert!(summary.total_in_high_certainty <= summary.total_in_all);
    assert!(summary.net_position_high <= summary.net_position_all);

    let critical = summary.next_critical.expect("critical");
    assert_eq!(critical.description, "Feed merchant");
}

#[test]
fn past_entries_report_overdue_labels() {
    let clock = FixedClock::new(today());
    let entries = farm_entries();
    let labels: Vec<String> = ProjectionService::project(&entries, 0.0, CertaintyFilter::All)
        .iter()
        .map(|p| days_label(days_until(p.entry.date, &clock)))
        .collect();
    assert_eq!(labels.first().map(String::as_str), Some("2d overdue"));
    assert!(labels.contains(&"3d".to_string()));
}

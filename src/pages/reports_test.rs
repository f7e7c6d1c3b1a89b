use super::*;
use std::collections::BTreeMap;

#[test]
fn report_range_expands_to_full_days() {
    assert_eq!(
        report_range("2026-01-01", " 2026-01-31 "),
        Ok(("2026-01-01T00:00:00".to_owned(), "2026-01-31T23:59:59".to_owned()))
    );
}

#[test]
fn report_range_allows_single_day() {
    assert!(report_range("2026-03-05", "2026-03-05").is_ok());
}

#[test]
fn report_range_rejects_missing_or_inverted() {
    assert_eq!(report_range("", "2026-01-31"), Err("Pick a start and end date."));
    assert_eq!(
        report_range("2026-02-01", "2026-01-31"),
        Err("Start date must be on or before end date.")
    );
}

#[test]
fn percent_label_rounds_to_one_decimal() {
    assert_eq!(percent_label(87.456), "87.5%");
    assert_eq!(percent_label(0.0), "0.0%");
}

#[test]
fn status_rows_are_sorted_by_status() {
    let mut counts = BTreeMap::new();
    counts.insert("PENDING".to_owned(), 1);
    counts.insert("DELIVERED".to_owned(), 4);
    assert_eq!(
        status_rows(&counts),
        vec![("DELIVERED".to_owned(), 4), ("PENDING".to_owned(), 1)]
    );
}

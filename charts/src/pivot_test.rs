//! Tests for the monthly pivot.

use std::collections::BTreeSet;

use storage::UserMonthRow;

use crate::pivot::{pivot, SeriesSet};

fn sample_rows() -> Vec<UserMonthRow> {
    vec![
        UserMonthRow::new(1, "a", "2024-01", 3),
        UserMonthRow::new(1, "a", "2024-03", 2),
        UserMonthRow::new(2, "b", "2024-02", 1),
    ]
}

#[test]
fn test_pivot_fills_missing_months_with_zero() {
    let set = pivot(&sample_rows());

    assert_eq!(set.months, vec!["2024-01", "2024-02", "2024-03"]);
    assert_eq!(set.get("a"), Some(&[3, 0, 2][..]));
    assert_eq!(set.get("b"), Some(&[0, 1, 0][..]));
    assert_eq!(set.series.len(), 2);
}

#[test]
fn test_pivot_empty_input() {
    let set = pivot(&[]);

    assert_eq!(set, SeriesSet::default());
    assert!(set.months.is_empty());
    assert!(set.series.is_empty());
    assert!(set.is_empty());
}

#[test]
fn test_pivot_absent_user_has_no_series() {
    let set = pivot(&sample_rows());

    assert!(set.get("ghost").is_none());
    assert!(!set.series.contains_key("ghost"));
}

#[test]
fn test_pivot_months_sorted_and_deduplicated() {
    let rows = vec![
        UserMonthRow::new(1, "a", "2023-12", 1),
        UserMonthRow::new(2, "b", "2023-02", 1),
        UserMonthRow::new(3, "c", "2023-12", 4),
        UserMonthRow::new(1, "a", "2022-11", 2),
    ];

    let set = pivot(&rows);

    let expected: Vec<String> = rows
        .iter()
        .map(|r| r.month.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    assert_eq!(set.months, expected);
    assert_eq!(set.months, vec!["2022-11", "2023-02", "2023-12"]);
}

#[test]
fn test_pivot_every_series_aligned_to_months() {
    let rows = vec![
        UserMonthRow::new(1, "a", "2024-05", 1),
        UserMonthRow::new(2, "b", "2024-01", 7),
        UserMonthRow::new(3, "c", "2024-09", 2),
        UserMonthRow::new(2, "b", "2024-09", 3),
    ];

    let set = pivot(&rows);

    for values in set.series.values() {
        assert_eq!(values.len(), set.months.len());
    }
    for row in &rows {
        assert_eq!(set.value(&row.name, &row.month), Some(row.total_messages));
    }
    assert_eq!(set.value("a", "2024-01"), Some(0));
    assert_eq!(set.value("c", "2024-05"), Some(0));
    assert_eq!(set.value("a", "1999-01"), None);
}

#[test]
fn test_pivot_input_order_does_not_matter() {
    let mut reversed = sample_rows();
    reversed.reverse();

    assert_eq!(pivot(&sample_rows()), pivot(&reversed));
}

#[test]
fn test_pivot_sums_rows_sharing_name_and_month() {
    let rows = vec![
        UserMonthRow::new(7, "alice", "2024-01", 2),
        UserMonthRow::new(9, "alice", "2024-01", 5),
    ];

    let set = pivot(&rows);

    assert_eq!(set.get("alice"), Some(&[7][..]));
}

#[test]
fn test_index_of() {
    let set = pivot(&sample_rows());

    assert_eq!(set.index_of("2024-01"), Some(0));
    assert_eq!(set.index_of("2024-03"), Some(2));
    assert_eq!(set.index_of("2025-01"), None);
}

#[test]
fn test_series_set_serializes_as_months_and_series() {
    let set = pivot(&sample_rows());

    let json = serde_json::to_value(&set).unwrap();

    assert_eq!(json["months"][1], "2024-02");
    assert_eq!(json["series"]["a"], serde_json::json!([3, 0, 2]));
    assert_eq!(json["series"]["b"], serde_json::json!([0, 1, 0]));
}

//! Tests for column sorting.

use std::cmp::Ordering;

use datatable_lib::sort::{compare_values, sort_records};
use datatable_lib::{Record, SortDirection, SortState};
use serde_json::json;

fn rows() -> Vec<Record> {
    vec![
        Record::new().set("id", 1).set("name", "Carol").set("team", "b"),
        Record::new().set("id", 2).set("name", "alice").set("team", "a"),
        Record::new().set("id", 3).set("name", "Bob").set("team", "b"),
        Record::new().set("id", 4).set("name", "Dave").set("team", "a"),
    ]
}

fn ids(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.display("id")).collect()
}

#[test]
fn test_no_sort_keeps_input_order() {
    let rows = rows();
    assert_eq!(ids(&sort_records(&rows, None)), ["1", "2", "3", "4"]);
}

#[test]
fn test_strings_sort_by_code_point() {
    let rows = rows();
    let sorted = sort_records(&rows, Some(&SortState::ascending("name")));
    // Uppercase letters sort before lowercase ones.
    assert_eq!(ids(&sorted), ["3", "1", "4", "2"]);
}

#[test]
fn test_descending_reverses() {
    let rows = rows();
    let sorted = sort_records(&rows, Some(&SortState::new("id", SortDirection::Desc)));
    assert_eq!(ids(&sorted), ["4", "3", "2", "1"]);
}

#[test]
fn test_sort_is_stable_in_both_directions() {
    let rows = rows();
    let asc = sort_records(&rows, Some(&SortState::ascending("team")));
    assert_eq!(ids(&asc), ["2", "4", "1", "3"]);

    let desc = sort_records(&rows, Some(&SortState::new("team", SortDirection::Desc)));
    assert_eq!(ids(&desc), ["1", "3", "2", "4"]);
}

#[test]
fn test_numbers_compare_numerically() {
    let rows = vec![
        Record::new().set("n", 10),
        Record::new().set("n", 9),
        Record::new().set("n", 2.5),
    ];
    let sorted = sort_records(&rows, Some(&SortState::ascending("n")));
    let values: Vec<String> = sorted.iter().map(|r| r.display("n")).collect();
    assert_eq!(values, ["2.5", "9", "10"]);
}

#[test]
fn test_missing_values_sort_first() {
    let rows = vec![
        Record::new().set("id", 1).set("n", 3),
        Record::new().set("id", 2),
        Record::new().set("id", 3).set("n", json!(null)),
    ];
    let sorted = sort_records(&rows, Some(&SortState::ascending("n")));
    assert_eq!(ids(&sorted), ["2", "3", "1"]);
}

#[test]
fn test_compare_values_mixed_kinds() {
    assert_eq!(compare_values(None, Some(&json!(false))), Ordering::Less);
    assert_eq!(compare_values(Some(&json!(true)), Some(&json!(0))), Ordering::Less);
    assert_eq!(compare_values(Some(&json!(100)), Some(&json!("1"))), Ordering::Less);
    assert_eq!(compare_values(Some(&json!("z")), Some(&json!([]))), Ordering::Less);
    assert_eq!(compare_values(Some(&json!(null)), None), Ordering::Equal);
    assert_eq!(compare_values(Some(&json!([1, 2])), Some(&json!([1, 3]))), Ordering::Less);
}

#[test]
fn test_direction_toggle() {
    assert_eq!(SortDirection::Asc.toggle(), SortDirection::Desc);
    assert_eq!(SortDirection::Desc.toggle(), SortDirection::Asc);
    assert_eq!(SortDirection::default(), SortDirection::Asc);
}

#[test]
fn test_compare_large_integers_exactly() {
    let big = 9_007_199_254_740_993_i64; // 2^53 + 1
    assert_eq!(
        compare_values(Some(&json!(big)), Some(&json!(big - 1))),
        Ordering::Greater
    );
    assert_eq!(
        compare_values(Some(&json!(u64::MAX - 1)), Some(&json!(u64::MAX))),
        Ordering::Less
    );
    assert_eq!(
        compare_values(Some(&json!(-1)), Some(&json!(u64::MAX))),
        Ordering::Less
    );
    assert_eq!(compare_values(Some(&json!(2)), Some(&json!(2.5))), Ordering::Less);
}

#[test]
fn test_sort_large_integer_ids() {
    let rows = vec![
        Record::new().set("id", 9_007_199_254_740_993_u64),
        Record::new().set("id", 9_007_199_254_740_992_u64),
    ];
    let sorted = sort_records(&rows, Some(&SortState::ascending("id")));
    assert_eq!(ids(&sorted), ["9007199254740992", "9007199254740993"]);
}

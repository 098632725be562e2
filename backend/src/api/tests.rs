//! Search service tests against the in-memory store.

use std::collections::BTreeMap;

use common::course_record::{CourseRecord, FIELD_CODE, FIELD_NAME};

use crate::api::search_courses;
use crate::store::MemoryCourseStore;

fn course(code: &str, name: &str) -> CourseRecord {
    CourseRecord {
        code: code.to_string(),
        name: name.to_string(),
        duration: "3(3-1-0-6)".to_string(),
        credits: "3".to_string(),
        weight: "0.7".to_string(),
    }
}

fn sample_store() -> MemoryCourseStore {
    MemoryCourseStore::from_records(&[
        course("CS101", "Intro to Programming"),
        course("MA201", "Calculus I"),
        course("IT3080", "Mạng máy tính"),
    ])
}

fn codes(results: &[CourseRecord]) -> Vec<&str> {
    results.iter().map(|r| r.code.as_str()).collect()
}

#[tokio::test]
async fn matches_on_code_substring() {
    let store = sample_store();
    let results = search_courses(&store, "cs").await.unwrap();
    assert_eq!(codes(&results), vec!["CS101"]);
}

#[tokio::test]
async fn matches_on_name_substring() {
    let store = sample_store();
    let results = search_courses(&store, "calculus").await.unwrap();
    assert_eq!(codes(&results), vec!["MA201"]);
}

#[tokio::test]
async fn match_is_case_insensitive_both_ways() {
    let store = sample_store();
    let results = search_courses(&store, "CALCULUS").await.unwrap();
    assert_eq!(codes(&results), vec!["MA201"]);

    let results = search_courses(&store, "ma2").await.unwrap();
    assert_eq!(codes(&results), vec!["MA201"]);
}

#[tokio::test]
async fn query_matching_several_records_returns_all_of_them() {
    let store = sample_store();
    // "i" occurs in "Intro to Programming", "Calculus I" and "IT3080".
    let results = search_courses(&store, "i").await.unwrap();
    assert_eq!(codes(&results), vec!["CS101", "IT3080", "MA201"]);
}

#[tokio::test]
async fn empty_query_returns_every_record() {
    let store = sample_store();
    let results = search_courses(&store, "").await.unwrap();
    assert_eq!(codes(&results), vec!["CS101", "IT3080", "MA201"]);
}

#[tokio::test]
async fn no_match_returns_empty_set_not_error() {
    let store = sample_store();
    let results = search_courses(&store, "zzz").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn record_without_name_still_matches_on_code() {
    let mut store = MemoryCourseStore::new();
    let mut fields = BTreeMap::new();
    fields.insert(FIELD_CODE.to_string(), "PH1010".to_string());
    store.insert_fields("course:PH1010", fields);

    let results = search_courses(&store, "ph10").await.unwrap();
    assert_eq!(codes(&results), vec!["PH1010"]);
    assert_eq!(results[0].name, "");
}

#[tokio::test]
async fn record_without_code_still_matches_on_name() {
    let mut store = MemoryCourseStore::new();
    let mut fields = BTreeMap::new();
    fields.insert(FIELD_NAME.to_string(), "Triết học Mác".to_string());
    store.insert_fields("course:unknown", fields);

    let results = search_courses(&store, "triết").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Triết học Mác");
}

#[tokio::test]
async fn vanished_key_matches_nothing_even_for_empty_query() {
    let mut store = sample_store();
    // Empty mapping is what the store yields for a key deleted between
    // enumeration and fetch.
    store.insert_fields("course:GONE", BTreeMap::new());

    let results = search_courses(&store, "").await.unwrap();
    assert_eq!(codes(&results), vec!["CS101", "IT3080", "MA201"]);
}

#[tokio::test]
async fn unicode_query_matches_accented_name() {
    let store = sample_store();
    let results = search_courses(&store, "máy tính").await.unwrap();
    assert_eq!(codes(&results), vec!["IT3080"]);
}

#[tokio::test]
async fn keys_outside_course_namespace_are_ignored() {
    let mut store = sample_store();
    let mut alias = BTreeMap::new();
    alias.insert(FIELD_NAME.to_string(), "alias entry".to_string());
    store.insert_fields("course_name:intro to programming", alias);

    let results = search_courses(&store, "intro").await.unwrap();
    assert_eq!(codes(&results), vec!["CS101"]);
}

#[tokio::test]
async fn result_set_serializes_with_stored_field_names() {
    let store = sample_store();
    let results = search_courses(&store, "cs").await.unwrap();
    let body = serde_json::to_value(&results).unwrap();
    assert_eq!(body[0]["Mã học phần"], "CS101");
    assert_eq!(body[0]["Tên học phần"], "Intro to Programming");
}

#[tokio::test]
async fn results_are_sorted_by_code() {
    let store = MemoryCourseStore::from_records(&[
        course("ZZ900", "Alpha"),
        course("AA100", "Omega"),
        course("MM500", "Middle"),
    ]);
    let results = search_courses(&store, "").await.unwrap();
    assert_eq!(codes(&results), vec!["AA100", "MM500", "ZZ900"]);
}

// crates/course-gate-core/tests/store.rs
// ============================================================================
// Module: Course Store Tests
// Description: Tests for the in-memory course store implementation.
// ============================================================================
//! ## Overview
//! Ensures the in-memory store returns stored summaries, misses cleanly,
//! and shares state across clones and shared handles.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::sync::Arc;

use course_gate_core::CourseCatalog;
use course_gate_core::CourseKey;
use course_gate_core::CourseStore;
use course_gate_core::CourseSummary;
use course_gate_core::InMemoryCourseStore;
use course_gate_core::SharedCourseStore;
use time::macros::datetime;

fn sample_course(run: &str) -> CourseSummary {
    CourseSummary {
        course_key: CourseKey::new("edX", "DemoX", run).expect("valid course key"),
        display_name: "Demonstration Course".to_owned(),
        start: datetime!(2030-01-01 00:00 UTC),
        self_paced: false,
        modes: Vec::new(),
    }
}

/// Verifies inserting then looking up a course succeeds.
#[test]
fn store_insert_and_lookup_roundtrip() {
    let store = InMemoryCourseStore::new();
    let course = sample_course("2030_T1");

    assert!(store.insert(course.clone()).expect("insert").is_none());
    let found = store.course(&course.course_key).expect("lookup");
    assert_eq!(found, Some(course));
}

/// Verifies looking up a missing course returns None.
#[test]
fn store_returns_none_for_missing_course() {
    let store = InMemoryCourseStore::new();
    let key = CourseKey::new("edX", "DemoX", "Missing").expect("valid course key");

    let found = store.course(&key).expect("lookup");
    assert!(found.is_none());
}

/// Verifies reinserting a key replaces the summary and returns the old one.
#[test]
fn store_insert_replaces_existing_summary() {
    let store = InMemoryCourseStore::new();
    let original = sample_course("2030_T1");
    let mut updated = original.clone();
    updated.display_name = "Renamed Course".to_owned();

    store.insert(original.clone()).expect("insert");
    let previous = store.insert(updated.clone()).expect("reinsert");
    assert_eq!(previous, Some(original));

    let found = store.course(&updated.course_key).expect("lookup");
    assert_eq!(found, Some(updated));
}

/// Verifies removal empties the store.
#[test]
fn store_remove_deletes_summary() {
    let store = InMemoryCourseStore::new();
    let course = sample_course("2030_T1");
    store.insert(course.clone()).expect("insert");

    let removed = store.remove(&course.course_key).expect("remove");
    assert_eq!(removed, Some(course.clone()));
    assert!(store.course(&course.course_key).expect("lookup").is_none());
    assert!(store.is_empty().expect("is_empty"));
}

/// Verifies clones observe writes made through either handle.
#[test]
fn store_clones_share_state() {
    let store = InMemoryCourseStore::new();
    let clone = store.clone();
    let course = sample_course("2030_T1");

    store.insert(course.clone()).expect("insert");
    let found = clone.course(&course.course_key).expect("lookup via clone");
    assert_eq!(found, Some(course));
    assert_eq!(clone.len().expect("len"), 1);
}

/// Verifies catalog seeding loads every course.
#[test]
fn store_seeds_from_catalog() {
    let catalog = CourseCatalog {
        courses: vec![sample_course("2030_T1"), sample_course("2030_T2")],
    };
    catalog.validate().expect("valid catalog");
    let store = InMemoryCourseStore::with_catalog(catalog);

    assert_eq!(store.len().expect("len"), 2);
    let key = CourseKey::new("edX", "DemoX", "2030_T2").expect("valid course key");
    assert!(store.course(&key).expect("lookup").is_some());
}

/// Verifies the trait-object handle delegates to the wrapped store.
#[test]
fn shared_store_delegates_lookups() {
    let store = InMemoryCourseStore::new();
    let course = sample_course("2030_T1");
    store.insert(course.clone()).expect("insert");

    let shared: SharedCourseStore = Arc::new(store);
    let found = shared.course(&course.course_key).expect("lookup");
    assert_eq!(found, Some(course));
}

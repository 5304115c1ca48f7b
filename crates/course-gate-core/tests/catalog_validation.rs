// crates/course-gate-core/tests/catalog_validation.rs
// ============================================================================
// Module: Catalog Validation Tests
// Description: Tests for course catalog invariants.
// Purpose: Reject catalogs with duplicate keys, bad names, or repeated modes.
// Dependencies: course-gate-core, serde_json, time
// ============================================================================
//! ## Overview
//! Ensures catalog validation fails closed: every structural violation is
//! reported before a catalog can seed a store.

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

use course_gate_core::CatalogError;
use course_gate_core::CourseCatalog;
use course_gate_core::CourseKey;
use course_gate_core::CourseMode;
use course_gate_core::CourseSummary;
use course_gate_core::EnrollmentMode;
use time::macros::datetime;

fn course(run: &str) -> CourseSummary {
    CourseSummary {
        course_key: CourseKey::new("edX", "DemoX", run).expect("valid course key"),
        display_name: "Demonstration Course".to_owned(),
        start: datetime!(2030-01-01 00:00 UTC),
        self_paced: false,
        modes: vec![CourseMode {
            mode: EnrollmentMode::Audit,
            upgrade_deadline: None,
        }],
    }
}

/// Verifies a well-formed catalog validates.
#[test]
fn valid_catalog_passes() {
    let catalog = CourseCatalog {
        courses: vec![course("2030_T1"), course("2030_T2")],
    };
    assert!(catalog.validate().is_ok());
}

/// Verifies the empty catalog is valid.
#[test]
fn empty_catalog_passes() {
    assert!(CourseCatalog::default().validate().is_ok());
}

/// Verifies duplicate course keys are rejected.
#[test]
fn duplicate_course_keys_are_rejected() {
    let catalog = CourseCatalog {
        courses: vec![course("2030_T1"), course("2030_T1")],
    };
    assert_eq!(
        catalog.validate(),
        Err(CatalogError::DuplicateCourseKey(
            "course-v1:edX+DemoX+2030_T1".to_owned()
        ))
    );
}

/// Verifies an empty display name is rejected.
#[test]
fn empty_display_name_is_rejected() {
    let mut bad = course("2030_T1");
    bad.display_name = String::new();
    let catalog = CourseCatalog {
        courses: vec![bad],
    };
    assert!(matches!(catalog.validate(), Err(CatalogError::EmptyDisplayName(_))));
}

/// Verifies an oversized display name is rejected.
#[test]
fn oversized_display_name_is_rejected() {
    let mut bad = course("2030_T1");
    bad.display_name = "n".repeat(256);
    let catalog = CourseCatalog {
        courses: vec![bad],
    };
    assert!(matches!(catalog.validate(), Err(CatalogError::DisplayNameTooLong(_))));
}

/// Verifies repeating an enrollment mode within a course is rejected.
#[test]
fn duplicate_modes_are_rejected() {
    let mut bad = course("2030_T1");
    bad.modes.push(CourseMode {
        mode: EnrollmentMode::Audit,
        upgrade_deadline: None,
    });
    let catalog = CourseCatalog {
        courses: vec![bad],
    };
    assert_eq!(
        catalog.validate(),
        Err(CatalogError::DuplicateMode {
            course_key: "course-v1:edX+DemoX+2030_T1".to_owned(),
            mode: "audit",
        })
    );
}

/// Verifies a catalog deserializes from its JSON wire form.
#[test]
fn catalog_deserializes_from_json() {
    let json = r#"{
        "courses": [
            {
                "course_key": "course-v1:edX+DemoX+Demo_2030",
                "display_name": "Demonstration Course",
                "start": "2030-01-01T00:00:00Z",
                "modes": [
                    {"mode": "verified", "upgrade_deadline": "2030-06-01T00:00:00Z"}
                ]
            }
        ]
    }"#;
    let catalog: CourseCatalog = serde_json::from_str(json).expect("deserialize catalog");
    assert!(catalog.validate().is_ok());

    let course = catalog.courses.first().expect("one course");
    assert_eq!(course.course_key.to_string(), "course-v1:edX+DemoX+Demo_2030");
    assert!(!course.self_paced);
    assert_eq!(course.start, datetime!(2030-01-01 00:00 UTC));
}

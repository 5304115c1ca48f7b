// crates/course-gate-core/src/core/catalog.rs
// ============================================================================
// Module: Course Gate Catalog
// Description: Course summaries, enrollment modes, and catalog validation.
// Purpose: Define the course data the gate evaluates, with load-time checks.
// Dependencies: crate::core::identifiers, serde, thiserror, time
// ============================================================================

//! ## Overview
//! The catalog holds the per-course facts the gate needs: start date, pacing,
//! and offered enrollment modes. Catalogs are validated at load time to
//! enforce invariants such as unique course keys and unique modes per course.
//! Course content itself (outlines, updates, welcome messages) lives in the
//! external content store and never passes through these types.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;

use crate::core::identifiers::CourseKey;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum length of a course display name in bytes.
const MAX_DISPLAY_NAME_LENGTH: usize = 255;

// ============================================================================
// SECTION: Enrollment Modes
// ============================================================================

/// Enrollment track a course offers.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
/// - [`EnrollmentMode::Verified`] is the upgrade target for the certificate
///   upsell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentMode {
    /// Free audit track without a certificate.
    Audit,
    /// Legacy free track with an honor-code certificate.
    Honor,
    /// Paid track with an identity-verified certificate.
    Verified,
}

impl EnrollmentMode {
    /// Returns the canonical mode label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Audit => "audit",
            Self::Honor => "honor",
            Self::Verified => "verified",
        }
    }
}

/// A mode a course offers, with its optional upgrade deadline.
///
/// # Invariants
/// - `upgrade_deadline` is meaningful only for [`EnrollmentMode::Verified`];
///   other modes carry `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMode {
    /// Enrollment track.
    pub mode: EnrollmentMode,
    /// Deadline after which upgrading into this mode closes.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub upgrade_deadline: Option<OffsetDateTime>,
}

// ============================================================================
// SECTION: Course Summary
// ============================================================================

/// Per-course facts the gate evaluates.
///
/// # Invariants
/// - `display_name` is non-empty and at most 255 bytes.
/// - `modes` contains each enrollment mode at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    /// Canonical course key.
    pub course_key: CourseKey,
    /// Human-readable course title.
    pub display_name: String,
    /// Timestamp after which course content is publicly accessible.
    #[serde(with = "time::serde::rfc3339")]
    pub start: OffsetDateTime,
    /// Whether the course is self-paced rather than instructor-paced.
    #[serde(default)]
    pub self_paced: bool,
    /// Enrollment tracks the course offers.
    #[serde(default)]
    pub modes: Vec<CourseMode>,
}

impl CourseSummary {
    /// Returns whether the course has begun at the supplied time.
    #[must_use]
    pub fn has_started(&self, now: OffsetDateTime) -> bool {
        now >= self.start
    }

    /// Returns whether a verified upgrade is currently open.
    ///
    /// The upgrade is open when the course offers a verified mode whose
    /// deadline is unset or still in the future.
    #[must_use]
    pub fn upgrade_open(&self, now: OffsetDateTime) -> bool {
        self.modes.iter().any(|course_mode| {
            course_mode.mode == EnrollmentMode::Verified
                && course_mode.upgrade_deadline.is_none_or(|deadline| deadline > now)
        })
    }

    /// Validates the course summary invariants.
    fn validate(&self) -> Result<(), CatalogError> {
        if self.display_name.is_empty() {
            return Err(CatalogError::EmptyDisplayName(self.course_key.to_string()));
        }
        if self.display_name.len() > MAX_DISPLAY_NAME_LENGTH {
            return Err(CatalogError::DisplayNameTooLong(self.course_key.to_string()));
        }
        for (index, course_mode) in self.modes.iter().enumerate() {
            let duplicate = self
                .modes
                .iter()
                .skip(index + 1)
                .any(|other| other.mode == course_mode.mode);
            if duplicate {
                return Err(CatalogError::DuplicateMode {
                    course_key: self.course_key.to_string(),
                    mode: course_mode.mode.as_str(),
                });
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Course Catalog
// ============================================================================

/// A validated collection of course summaries.
///
/// # Invariants
/// - Course keys are unique within the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCatalog {
    /// Courses in deterministic order.
    pub courses: Vec<CourseSummary>,
}

impl CourseCatalog {
    /// Validates the catalog invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when validation fails.
    pub fn validate(&self) -> Result<(), CatalogError> {
        ensure_unique_course_keys(&self.courses)?;
        for course in &self.courses {
            course.validate()?;
        }
        Ok(())
    }
}

/// Ensures course keys are unique within the catalog.
fn ensure_unique_course_keys(courses: &[CourseSummary]) -> Result<(), CatalogError> {
    for (index, course) in courses.iter().enumerate() {
        let duplicate = courses
            .iter()
            .skip(index + 1)
            .any(|other| other.course_key == course.course_key);
        if duplicate {
            return Err(CatalogError::DuplicateCourseKey(course.course_key.to_string()));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Catalog Errors
// ============================================================================

/// Catalog validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Duplicate course keys detected.
    #[error("duplicate course key: {0}")]
    DuplicateCourseKey(String),
    /// Course display name is empty.
    #[error("course display name is empty: {0}")]
    EmptyDisplayName(String),
    /// Course display name exceeds the length limit.
    #[error("course display name exceeds length limit: {0}")]
    DisplayNameTooLong(String),
    /// A course offers the same enrollment mode twice.
    #[error("course {course_key} offers duplicate mode: {mode}")]
    DuplicateMode {
        /// Offending course key.
        course_key: String,
        /// Duplicated mode label.
        mode: &'static str,
    },
}

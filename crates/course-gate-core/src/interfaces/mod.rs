// crates/course-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Course Gate Interfaces
// Description: Traits the gate uses to reach host-owned collaborators.
// Purpose: Keep evaluation decoupled from storage and locale machinery.
// Dependencies: crate::core, thiserror, time
// ============================================================================

//! ## Overview
//! The gate consumes two host-provided capabilities: a course lookup and a
//! date renderer. Both are traits so hosts can supply database-backed or
//! platform-localized implementations; the crate ships in-memory and
//! compiled-catalog defaults for tests and small deployments.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use time::Date;

use crate::core::catalog::CourseSummary;
use crate::core::identifiers::CourseKey;

// ============================================================================
// SECTION: Course Store
// ============================================================================

/// Read-side course lookup.
///
/// Implementations must be consistent within a single evaluation: the gate
/// performs exactly one lookup per request.
pub trait CourseStore: Send + Sync {
    /// Fetches the summary for a course, if the course exists.
    ///
    /// Returns `Ok(None)` for a well-formed key with no matching course.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backing store cannot be read.
    fn course(&self, course_key: &CourseKey) -> Result<Option<CourseSummary>, StoreError>;
}

/// Failures raised by [`CourseStore`] implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Shared in-memory state was poisoned by a panicking writer.
    #[error("course store state poisoned")]
    Poisoned,
    /// Backend-specific failure reported by a host implementation.
    #[error("course store backend failure: {message}")]
    Backend {
        /// Human-readable backend diagnostic.
        message: String,
    },
}

// ============================================================================
// SECTION: Date Localizer
// ============================================================================

/// Renders dates for viewer-facing display.
///
/// The gate treats the returned string as opaque display text: it flows
/// into countdown messages and redirect query parameters unchanged, so
/// implementations may return any Unicode text.
pub trait DateLocalizer: Send + Sync {
    /// Renders a date in the viewer's short display form.
    fn short_date(&self, date: Date) -> String;
}

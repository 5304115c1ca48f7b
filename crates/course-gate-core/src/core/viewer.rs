// crates/course-gate-core/src/core/viewer.rs
// ============================================================================
// Module: Course Gate Viewer Model
// Description: Viewer identity, enrollment, and per-course staff role.
// Purpose: Capture the access-relevant facts about the requesting user.
// Dependencies: crate::core::{catalog, identifiers}, serde
// ============================================================================

//! ## Overview
//! The viewer model carries only what the gate needs: whether the request is
//! anonymous, and for known users their enrollment track and course-staff
//! role. Session and authentication mechanics live in the host; by the time a
//! request reaches the gate these facts are settled inputs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::catalog::EnrollmentMode;
use crate::core::identifiers::UserId;

// ============================================================================
// SECTION: Viewer
// ============================================================================

/// The requesting user as seen by the gate.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Viewer {
    /// Unauthenticated request.
    Anonymous,
    /// Authenticated platform user.
    Known(KnownViewer),
}

impl Viewer {
    /// Returns whether the viewer is anonymous.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    /// Returns whether the viewer is enrolled in the course.
    #[must_use]
    pub const fn is_enrolled(&self) -> bool {
        match self {
            Self::Anonymous => false,
            Self::Known(viewer) => viewer.enrollment.is_some(),
        }
    }

    /// Returns whether the viewer holds the course-staff role.
    #[must_use]
    pub const fn is_staff(&self) -> bool {
        match self {
            Self::Anonymous => false,
            Self::Known(viewer) => viewer.course_staff,
        }
    }

    /// Returns the viewer's enrollment mode, if enrolled.
    #[must_use]
    pub const fn enrollment_mode(&self) -> Option<EnrollmentMode> {
        match self {
            Self::Anonymous => None,
            Self::Known(viewer) => viewer.enrollment,
        }
    }
}

// ============================================================================
// SECTION: Known Viewer
// ============================================================================

/// Access-relevant facts about an authenticated user.
///
/// # Invariants
/// - `enrollment` is `None` for unenrolled users.
/// - `course_staff` is scoped to the course being evaluated, not a global
///   role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownViewer {
    /// Platform user identifier.
    pub user_id: UserId,
    /// Enrollment track in the course being evaluated, if any.
    pub enrollment: Option<EnrollmentMode>,
    /// Whether the user is staff in the course being evaluated.
    pub course_staff: bool,
}

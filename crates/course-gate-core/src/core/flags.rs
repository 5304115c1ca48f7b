// crates/course-gate-core/src/core/flags.rs
// ============================================================================
// Module: Course Gate Feature Flags
// Description: Gate-level feature flag booleans.
// Purpose: Carry flag service decisions into gate evaluation as plain data.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Course Gate does not embed a feature-flag service. Hosts resolve their
//! flags and hand the gate plain booleans, keeping evaluation deterministic
//! and replayable. A host that needs per-request flag values constructs a
//! gate per request.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Access Flags
// ============================================================================

/// Feature flag booleans consumed by gate evaluation.
///
/// # Invariants
/// - Values are snapshots; resolving them is the host's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessFlags {
    /// Globally disables start-date gating (operational kill switch).
    #[serde(default)]
    pub disable_start_dates: bool,
    /// Grants access to courses before their start date (early access
    /// override).
    #[serde(default)]
    pub pre_start_access: bool,
    /// Enables the unified course home, which surfaces the welcome message.
    #[serde(default = "default_unified_course_tab")]
    pub unified_course_tab: bool,
}

impl Default for AccessFlags {
    fn default() -> Self {
        Self {
            disable_start_dates: false,
            pre_start_access: false,
            unified_course_tab: true,
        }
    }
}

/// Serde default for [`AccessFlags::unified_course_tab`].
const fn default_unified_course_tab() -> bool {
    true
}

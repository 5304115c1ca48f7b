// crates/course-gate-core/src/lib.rs
// ============================================================================
// Module: Course Gate Core Library
// Description: Public API surface for the Course Gate core.
// Purpose: Expose core types, interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Course Gate core provides deterministic course-home access evaluation for an
//! online learning platform. Given a viewer, a course, the current time, and
//! feature flags, it decides whether the viewer may see course content and
//! which informational message to present. It is framework-agnostic and
//! integrates through explicit interfaces rather than embedding into a web
//! stack.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::CourseStore;
pub use interfaces::DateLocalizer;
pub use interfaces::StoreError;
pub use runtime::AccessError;
pub use runtime::AccessGate;
pub use runtime::AccessRequest;
pub use runtime::InMemoryCourseStore;
pub use runtime::MAX_ROUTE_LENGTH;
pub use runtime::NOTLIVE_PARAM;
pub use runtime::RouteError;
pub use runtime::RouteTable;
pub use runtime::SharedCourseStore;

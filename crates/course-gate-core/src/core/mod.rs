// crates/course-gate-core/src/core/mod.rs
// ============================================================================
// Module: Course Gate Core Types
// Description: Canonical course, viewer, flag, and decision structures.
// Purpose: Provide stable, serializable types for Course Gate evaluations.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Course Gate core types define the course catalog, viewer identity, feature
//! flags, and access decisions. These types are the canonical source of truth
//! for any derived API surfaces (HTTP handlers, template contexts, or CLIs).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod catalog;
pub mod decision;
pub mod flags;
pub mod identifiers;
pub mod locale;
pub mod viewer;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::CatalogError;
pub use catalog::CourseCatalog;
pub use catalog::CourseMode;
pub use catalog::CourseSummary;
pub use catalog::EnrollmentMode;
pub use decision::AccessDecision;
pub use decision::ContentVisibility;
pub use decision::DecisionTrace;
pub use decision::GateRule;
pub use decision::HomeMessage;
pub use decision::MessageKind;
pub use decision::RedirectTarget;
pub use flags::AccessFlags;
pub use identifiers::CourseKey;
pub use identifiers::CourseKeyError;
pub use identifiers::UserId;
pub use locale::CatalogDateLocalizer;
pub use locale::Locale;
pub use locale::SUPPORTED_LOCALES;
pub use viewer::KnownViewer;
pub use viewer::Viewer;

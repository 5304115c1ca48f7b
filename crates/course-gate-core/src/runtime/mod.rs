// crates/course-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Course Gate Runtime
// Description: Evaluation engine, route table, and bundled store backends.
// Purpose: Wire core types and interfaces into a working access gate.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The runtime owns the decision ladder itself plus the two pieces hosts
//! usually take off the shelf: a route table for the paths decisions point
//! at and an in-memory course store for tests and small deployments.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Access gate evaluation ladder.
pub mod gate;
/// Bundled course store backends.
pub mod store;
/// Route table for decision paths.
pub mod urls;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use gate::AccessError;
pub use gate::AccessGate;
pub use gate::AccessRequest;
pub use store::InMemoryCourseStore;
pub use store::SharedCourseStore;
pub use urls::MAX_ROUTE_LENGTH;
pub use urls::NOTLIVE_PARAM;
pub use urls::RouteError;
pub use urls::RouteTable;

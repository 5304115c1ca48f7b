// crates/course-gate-config/src/lib.rs
// ============================================================================
// Module: Course Gate Config Library
// Description: Canonical config model and validation for course gate hosts.
// Purpose: Single source of truth for course-gate.toml semantics.
// Dependencies: course-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! `course-gate-config` defines the deployment configuration for a course
//! gate: the route table, platform-wide access flag defaults, and display
//! locale. Loading is strict and fail-closed so a typo in an operator's
//! config surfaces as an error instead of silently opening or closing
//! courses.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;

// crates/course-gate-cli/src/lib.rs
// ============================================================================
// Module: Course Gate CLI Library
// Description: Shared helpers for the course gate command-line interface.
// Purpose: Provide reusable components (i18n) for the CLI binary and tests.
// Dependencies: course-gate-core
// ============================================================================

//! ## Overview
//! This library module houses shared CLI utilities, including the
//! internationalized message catalog. The binary entry point (`src/main.rs`)
//! imports these helpers to keep all user-facing output consistent.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Internationalization helpers and message catalog.
pub mod i18n;

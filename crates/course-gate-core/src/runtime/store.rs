// crates/course-gate-core/src/runtime/store.rs
// ============================================================================
// Module: Course Gate Store Backends
// Description: Bundled in-memory course store and shared store alias.
// Purpose: Give tests and small deployments a working lookup backend.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The in-memory store keeps course summaries behind a shared mutex so
//! clones observe the same catalog. Hosts with real persistence implement
//! [`CourseStore`] themselves and hand the gate a [`SharedCourseStore`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use crate::core::catalog::CourseCatalog;
use crate::core::catalog::CourseSummary;
use crate::core::identifiers::CourseKey;
use crate::interfaces::CourseStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: Shared Store
// ============================================================================

/// Shared handle to any course store implementation.
pub type SharedCourseStore = Arc<dyn CourseStore>;

impl CourseStore for SharedCourseStore {
    fn course(&self, course_key: &CourseKey) -> Result<Option<CourseSummary>, StoreError> {
        self.as_ref().course(course_key)
    }
}

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory course store keyed by course key.
///
/// # Invariants
/// - Clones share the same underlying catalog state.
/// - Lookups return owned summaries; callers never hold the lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCourseStore {
    /// Shared catalog state.
    state: Arc<Mutex<BTreeMap<CourseKey, CourseSummary>>>,
}

impl InMemoryCourseStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded from a catalog.
    ///
    /// Callers validate the catalog first; on duplicate keys the last
    /// summary wins.
    #[must_use]
    pub fn with_catalog(catalog: CourseCatalog) -> Self {
        let mut courses = BTreeMap::new();
        for course in catalog.courses {
            courses.insert(course.course_key.clone(), course);
        }
        Self {
            state: Arc::new(Mutex::new(courses)),
        }
    }

    /// Inserts or replaces a course summary.
    ///
    /// Returns the previous summary for the same key, if any.
    ///
    /// # Errors
    /// Returns [`StoreError::Poisoned`] when the shared state is poisoned.
    pub fn insert(&self, course: CourseSummary) -> Result<Option<CourseSummary>, StoreError> {
        let mut state = self.state.lock().map_err(|_error| StoreError::Poisoned)?;
        Ok(state.insert(course.course_key.clone(), course))
    }

    /// Removes a course summary.
    ///
    /// # Errors
    /// Returns [`StoreError::Poisoned`] when the shared state is poisoned.
    pub fn remove(&self, course_key: &CourseKey) -> Result<Option<CourseSummary>, StoreError> {
        let mut state = self.state.lock().map_err(|_error| StoreError::Poisoned)?;
        Ok(state.remove(course_key))
    }

    /// Returns the number of stored courses.
    ///
    /// # Errors
    /// Returns [`StoreError::Poisoned`] when the shared state is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        let state = self.state.lock().map_err(|_error| StoreError::Poisoned)?;
        Ok(state.len())
    }

    /// Returns whether the store holds no courses.
    ///
    /// # Errors
    /// Returns [`StoreError::Poisoned`] when the shared state is poisoned.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl CourseStore for InMemoryCourseStore {
    fn course(&self, course_key: &CourseKey) -> Result<Option<CourseSummary>, StoreError> {
        let state = self.state.lock().map_err(|_error| StoreError::Poisoned)?;
        Ok(state.get(course_key).cloned())
    }
}

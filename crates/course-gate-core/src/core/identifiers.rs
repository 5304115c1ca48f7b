// crates/course-gate-core/src/core/identifiers.rs
// ============================================================================
// Module: Course Gate Identifiers
// Description: Canonical identifiers for courses and platform users.
// Purpose: Provide strongly typed, serializable identifiers with stable wire forms.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! This module defines the canonical identifiers used throughout Course Gate.
//! Course keys accept two wire forms: the legacy `org/number/run` triple and
//! the namespaced `course-v1:org+number+run` form. Both normalize to the same
//! key; the namespaced form is canonical on output. User identifiers are
//! numeric and enforce non-zero, 1-based invariants at construction
//! boundaries.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::num::NonZeroU64;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum length of a single course key segment in bytes.
const MAX_SEGMENT_LENGTH: usize = 255;

/// Namespace prefix for the canonical course key wire form.
const NAMESPACE_PREFIX: &str = "course-v1:";

// ============================================================================
// SECTION: Course Key
// ============================================================================

/// Canonical course identifier composed of organization, number, and run.
///
/// # Invariants
/// - Segments are non-empty, at most 255 bytes, and contain no whitespace,
///   control characters, `/`, or `+`.
/// - Display renders the namespaced `course-v1:org+number+run` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseKey {
    /// Organization segment (e.g., `edX`).
    org: String,
    /// Course number segment (e.g., `DemoX`).
    number: String,
    /// Course run segment (e.g., `2030_T1`).
    run: String,
}

impl CourseKey {
    /// Creates a course key from validated segments.
    ///
    /// # Errors
    ///
    /// Returns [`CourseKeyError`] when any segment violates the key invariants.
    pub fn new(
        org: impl Into<String>,
        number: impl Into<String>,
        run: impl Into<String>,
    ) -> Result<Self, CourseKeyError> {
        let key = Self {
            org: org.into(),
            number: number.into(),
            run: run.into(),
        };
        key.validate()?;
        Ok(key)
    }

    /// Parses a course key from either supported wire form.
    ///
    /// # Errors
    ///
    /// Returns [`CourseKeyError`] when the value matches neither form or a
    /// segment violates the key invariants.
    pub fn parse(value: &str) -> Result<Self, CourseKeyError> {
        let (body, separator) = match value.strip_prefix(NAMESPACE_PREFIX) {
            Some(body) => (body, '+'),
            None => (value, '/'),
        };
        let [org, number, run] = split_segments(value, body, separator)?;
        Self::new(org, number, run)
    }

    /// Returns the organization segment.
    #[must_use]
    pub fn org(&self) -> &str {
        &self.org
    }

    /// Returns the course number segment.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the course run segment.
    #[must_use]
    pub fn run(&self) -> &str {
        &self.run
    }

    /// Validates segment invariants.
    fn validate(&self) -> Result<(), CourseKeyError> {
        for segment in [&self.org, &self.number, &self.run] {
            if segment.is_empty() {
                return Err(CourseKeyError::EmptySegment {
                    key: self.wire_form(),
                });
            }
            if segment.len() > MAX_SEGMENT_LENGTH {
                return Err(CourseKeyError::SegmentTooLong {
                    key: self.wire_form(),
                    limit: MAX_SEGMENT_LENGTH,
                });
            }
            let forbidden = segment
                .chars()
                .find(|ch| matches!(ch, '/' | '+') || ch.is_whitespace() || ch.is_control());
            if let Some(character) = forbidden {
                return Err(CourseKeyError::ForbiddenCharacter {
                    key: self.wire_form(),
                    character,
                });
            }
        }
        Ok(())
    }

    /// Renders the canonical wire form without revalidating.
    fn wire_form(&self) -> String {
        format!("{NAMESPACE_PREFIX}{}+{}+{}", self.org, self.number, self.run)
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{NAMESPACE_PREFIX}{}+{}+{}", self.org, self.number, self.run)
    }
}

impl Serialize for CourseKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CourseKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

/// Splits a key body into exactly three segments.
fn split_segments<'a>(
    original: &str,
    body: &'a str,
    separator: char,
) -> Result<[&'a str; 3], CourseKeyError> {
    let mut parts = body.split(separator);
    let org = parts.next().unwrap_or_default();
    let number = parts.next().ok_or_else(|| CourseKeyError::Malformed {
        value: original.to_string(),
    })?;
    let run = parts.next().ok_or_else(|| CourseKeyError::Malformed {
        value: original.to_string(),
    })?;
    if parts.next().is_some() {
        return Err(CourseKeyError::Malformed {
            value: original.to_string(),
        });
    }
    Ok([org, number, run])
}

// ============================================================================
// SECTION: Course Key Errors
// ============================================================================

/// Course key parsing and validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling; hosts map all of them to
///   a not-found response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseKeyError {
    /// Value matches neither supported wire form.
    #[error("course key must use org/number/run or course-v1:org+number+run form: {value}")]
    Malformed {
        /// Offending input value.
        value: String,
    },
    /// A key segment is empty.
    #[error("course key segment is empty: {key}")]
    EmptySegment {
        /// Offending key in canonical form.
        key: String,
    },
    /// A key segment exceeds the length limit.
    #[error("course key segment exceeds {limit} bytes: {key}")]
    SegmentTooLong {
        /// Offending key in canonical form.
        key: String,
        /// Maximum allowed segment length in bytes.
        limit: usize,
    },
    /// A key segment contains a forbidden character.
    #[error("course key contains forbidden character {character:?}: {key}")]
    ForbiddenCharacter {
        /// Offending key in canonical form.
        key: String,
        /// First forbidden character encountered.
        character: char,
    },
}

// ============================================================================
// SECTION: User Identifier
// ============================================================================

/// Platform user identifier.
///
/// # Invariants
/// - Always >= 1 (non-zero, 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(NonZeroU64);

impl UserId {
    /// Creates a new user identifier from a non-zero value.
    #[must_use]
    pub const fn new(id: NonZeroU64) -> Self {
        Self(id)
    }

    /// Creates a user identifier from a raw value (returns `None` if zero).
    #[must_use]
    pub fn from_raw(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    /// Returns the raw identifier value (always >= 1).
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.get().fmt(f)
    }
}

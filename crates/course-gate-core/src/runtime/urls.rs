// crates/course-gate-core/src/runtime/urls.rs
// ============================================================================
// Module: Course Gate Route Table
// Description: Paths that access decisions point viewers at.
// Purpose: Keep decision routing configurable while encoding stays uniform.
// Dependencies: crate::core, serde, thiserror, url
// ============================================================================

//! ## Overview
//! Decisions reference three host routes: the learner dashboard, the login
//! page, and the course home page itself. The table validates its paths up
//! front so evaluation never produces a malformed location, and it owns the
//! two query parameters the gate emits.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use url::form_urlencoded;

use crate::core::decision::RedirectTarget;
use crate::core::identifiers::CourseKey;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Query parameter carrying the localized start date on dashboard redirects.
pub const NOTLIVE_PARAM: &str = "notlive";

/// Query parameter carrying the post-login return path.
pub const NEXT_PARAM: &str = "next";

/// Placeholder the course home template must contain.
pub const COURSE_KEY_PLACEHOLDER: &str = "{course_key}";

/// Maximum accepted length of a configured route path in bytes.
pub const MAX_ROUTE_LENGTH: usize = 2048;

/// Default learner dashboard path.
const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";

/// Default login page path.
const DEFAULT_LOGIN_PATH: &str = "/login";

/// Default course home path template.
const DEFAULT_COURSE_HOME_TEMPLATE: &str = "/courses/{course_key}/course/";

// ============================================================================
// SECTION: Route Table
// ============================================================================

/// Host routes referenced by access decisions.
///
/// # Invariants
/// - Every path is absolute and carries no query or fragment.
/// - The course home template contains the course key placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouteTable {
    /// Learner dashboard path for start-date redirects.
    pub dashboard_path: String,
    /// Login page path for anonymous-viewer prompts.
    pub login_path: String,
    /// Course home path template with a `{course_key}` placeholder.
    pub course_home_template: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            course_home_template: DEFAULT_COURSE_HOME_TEMPLATE.to_owned(),
        }
    }
}

impl RouteTable {
    /// Validates every route in the table.
    ///
    /// # Errors
    /// Returns [`RouteError`] when a path is not absolute, exceeds
    /// [`MAX_ROUTE_LENGTH`], carries a query, fragment, or whitespace, or
    /// the course home template does not contain the placeholder exactly
    /// once.
    pub fn validate(&self) -> Result<(), RouteError> {
        ensure_path("dashboard_path", self.dashboard_path.as_str())?;
        ensure_path("login_path", self.login_path.as_str())?;
        ensure_path("course_home_template", self.course_home_template.as_str())?;
        match self.course_home_template.matches(COURSE_KEY_PLACEHOLDER).count() {
            0 => Err(RouteError::MissingCourseKeyPlaceholder {
                template: self.course_home_template.clone(),
            }),
            1 => Ok(()),
            _ => Err(RouteError::DuplicateCourseKeyPlaceholder {
                template: self.course_home_template.clone(),
            }),
        }
    }

    /// Builds the dashboard redirect for a course that is not yet live.
    ///
    /// The localized start date rides in the [`NOTLIVE_PARAM`] query
    /// parameter and is encoded when the target is rendered.
    #[must_use]
    pub fn dashboard_redirect(&self, start_display: &str) -> RedirectTarget {
        RedirectTarget::new(self.dashboard_path.as_str())
            .with_param(NOTLIVE_PARAM, start_display)
    }

    /// Renders the course home path for a course.
    #[must_use]
    pub fn course_home_path(&self, course_key: &CourseKey) -> String {
        self.course_home_template
            .replace(COURSE_KEY_PLACEHOLDER, course_key.to_string().as_str())
    }

    /// Builds the login URL that returns to a course home after sign-in.
    ///
    /// The return path is carried in the [`NEXT_PARAM`] parameter with
    /// every reserved byte percent-encoded, so path separators inside the
    /// value survive intact.
    #[must_use]
    pub fn login_url(&self, course_key: &CourseKey) -> String {
        let home = self.course_home_path(course_key);
        let encoded: String = form_urlencoded::byte_serialize(home.as_bytes()).collect();
        format!("{}?{NEXT_PARAM}={encoded}", self.login_path)
    }
}

/// Checks one route path for shape violations.
fn ensure_path(route: &'static str, value: &str) -> Result<(), RouteError> {
    if !value.starts_with('/') {
        return Err(RouteError::MissingLeadingSlash {
            route,
            value: value.to_owned(),
        });
    }
    if value.len() > MAX_ROUTE_LENGTH {
        return Err(RouteError::RouteTooLong {
            route,
            limit: MAX_ROUTE_LENGTH,
        });
    }
    if value.contains(['?', '#']) {
        return Err(RouteError::ForbiddenQuery {
            route,
            value: value.to_owned(),
        });
    }
    if value.contains(char::is_whitespace) {
        return Err(RouteError::ForbiddenWhitespace {
            route,
            value: value.to_owned(),
        });
    }
    Ok(())
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Route table validation failures.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A route path did not start with `/`.
    #[error("route {route} must be absolute, got: {value}")]
    MissingLeadingSlash {
        /// Route table field name.
        route: &'static str,
        /// Offending path value.
        value: String,
    },
    /// A route path exceeded the length limit.
    #[error("route {route} exceeds {limit} bytes")]
    RouteTooLong {
        /// Route table field name.
        route: &'static str,
        /// Maximum accepted length in bytes.
        limit: usize,
    },
    /// A route path embedded a query string or fragment.
    #[error("route {route} must not carry a query or fragment, got: {value}")]
    ForbiddenQuery {
        /// Route table field name.
        route: &'static str,
        /// Offending path value.
        value: String,
    },
    /// A route path embedded whitespace.
    #[error("route {route} must not contain whitespace, got: {value}")]
    ForbiddenWhitespace {
        /// Route table field name.
        route: &'static str,
        /// Offending path value.
        value: String,
    },
    /// The course home template lacked the course key placeholder.
    #[error("course home template must contain {{course_key}}, got: {template}")]
    MissingCourseKeyPlaceholder {
        /// Offending template value.
        template: String,
    },
    /// The course home template repeated the course key placeholder.
    #[error("course home template must contain {{course_key}} exactly once, got: {template}")]
    DuplicateCourseKeyPlaceholder {
        /// Offending template value.
        template: String,
    },
}

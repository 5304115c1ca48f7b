// crates/course-gate-core/src/runtime/gate.rs
// ============================================================================
// Module: Course Gate Evaluation
// Description: The access decision ladder for the course home page.
// Purpose: Turn one viewer, course, and instant into one access decision.
// Dependencies: crate::{core, interfaces, runtime}, serde, thiserror, time
// ============================================================================

//! ## Overview
//! Evaluation is a pure function of its request plus the gate's fixed
//! configuration. Rules are checked in ladder order and the first match
//! wins: start-date redirect, login prompt, enroll prompt, pre-start
//! countdown, then open access. The gate performs exactly one store
//! lookup and never consults the wall clock, so identical requests always
//! produce identical decisions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;

use crate::core::catalog::CourseSummary;
use crate::core::catalog::EnrollmentMode;
use crate::core::decision::AccessDecision;
use crate::core::decision::ContentVisibility;
use crate::core::decision::DecisionTrace;
use crate::core::decision::GateRule;
use crate::core::decision::HomeMessage;
use crate::core::decision::RedirectTarget;
use crate::core::flags::AccessFlags;
use crate::core::identifiers::CourseKey;
use crate::core::viewer::Viewer;
use crate::interfaces::CourseStore;
use crate::interfaces::DateLocalizer;
use crate::interfaces::StoreError;
use crate::runtime::urls::RouteError;
use crate::runtime::urls::RouteTable;

// ============================================================================
// SECTION: Access Request
// ============================================================================

/// One course-home access question.
///
/// # Invariants
/// - `now` is supplied by the caller; the gate never reads the wall clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequest {
    /// Viewer asking for the page.
    pub viewer: Viewer,
    /// Course the viewer is asking about.
    pub course_key: CourseKey,
    /// Request time every date comparison uses.
    #[serde(with = "time::serde::rfc3339")]
    pub now: OffsetDateTime,
    /// Per-request early access grant for this viewer and course.
    #[serde(default)]
    pub early_access_override: bool,
}

// ============================================================================
// SECTION: Access Gate
// ============================================================================

/// Course-home access gate.
///
/// Holds the course lookup, the date renderer, and the routing and flag
/// configuration shared by every evaluation.
#[derive(Debug)]
pub struct AccessGate<S, L>
where
    S: CourseStore,
    L: DateLocalizer,
{
    /// Course lookup used once per evaluation.
    store: S,
    /// Renderer for viewer-facing start dates.
    localizer: L,
    /// Routes decisions point viewers at.
    routes: RouteTable,
    /// Platform-wide access switches.
    flags: AccessFlags,
}

impl<S, L> AccessGate<S, L>
where
    S: CourseStore,
    L: DateLocalizer,
{
    /// Creates a gate over the given collaborators and configuration.
    ///
    /// # Errors
    /// Returns [`RouteError`] when the route table is malformed.
    pub fn new(
        store: S,
        localizer: L,
        routes: RouteTable,
        flags: AccessFlags,
    ) -> Result<Self, RouteError> {
        routes.validate()?;
        Ok(Self {
            store,
            localizer,
            routes,
            flags,
        })
    }

    /// Returns the route table this gate evaluates against.
    #[must_use]
    pub const fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Returns the access flags this gate evaluates against.
    #[must_use]
    pub const fn flags(&self) -> &AccessFlags {
        &self.flags
    }

    /// Evaluates one access request against the decision ladder.
    ///
    /// # Errors
    /// Returns [`AccessError::CourseNotFound`] when the course key matches
    /// no course, and [`AccessError::Store`] when the lookup itself fails.
    /// Hosts surface both as a not-found page, never as a redirect.
    pub fn evaluate(&self, request: &AccessRequest) -> Result<AccessDecision, AccessError> {
        let course = self.store.course(&request.course_key)?.ok_or_else(|| {
            AccessError::CourseNotFound {
                course_key: request.course_key.clone(),
            }
        })?;

        let started = course.has_started(request.now);
        let admitted_early = request.early_access_override || self.flags.pre_start_access;
        let gated = !self.flags.disable_start_dates && !request.viewer.is_staff();
        if !started && !admitted_early && gated {
            let start_display = self.localizer.short_date(course.start.date());
            let redirect = self.routes.dashboard_redirect(start_display.as_str());
            return Ok(self.conclude(
                request,
                &course,
                GateRule::StartDateRedirect,
                HomeMessage::None,
                Some(redirect),
            ));
        }

        if request.viewer.is_anonymous() {
            let login_url = self.routes.login_url(&request.course_key);
            return Ok(self.conclude(
                request,
                &course,
                GateRule::LoginPrompt,
                HomeMessage::LoginPrompt {
                    login_url,
                },
                None,
            ));
        }

        if !request.viewer.is_enrolled() && !request.viewer.is_staff() {
            return Ok(self.conclude(
                request,
                &course,
                GateRule::EnrollPrompt,
                HomeMessage::EnrollPrompt {
                    course_key: request.course_key.clone(),
                },
                None,
            ));
        }

        if request.viewer.is_enrolled() && !started {
            let start_display = self.localizer.short_date(course.start.date());
            let days_until_start = days_until(request.now, course.start);
            return Ok(self.conclude(
                request,
                &course,
                GateRule::PreStartCountdown,
                HomeMessage::PreStartCountdown {
                    start_display,
                    days_until_start,
                },
                None,
            ));
        }

        Ok(self.conclude(request, &course, GateRule::Open, HomeMessage::None, None))
    }

    /// Assembles the final decision for the rule that fired.
    fn conclude(
        &self,
        request: &AccessRequest,
        course: &CourseSummary,
        rule: GateRule,
        message: HomeMessage,
        redirect: Option<RedirectTarget>,
    ) -> AccessDecision {
        let allowed = redirect.is_none();
        let visibility = if allowed {
            section_visibility(&request.viewer, course, request.now, &self.flags)
        } else {
            ContentVisibility::hidden()
        };
        AccessDecision {
            allowed,
            message,
            redirect,
            visibility,
            trace: DecisionTrace {
                rule,
                course_key: request.course_key.clone(),
                evaluated_at: request.now,
            },
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Computes which page sections an admitted viewer should see.
fn section_visibility(
    viewer: &Viewer,
    course: &CourseSummary,
    now: OffsetDateTime,
    flags: &AccessFlags,
) -> ContentVisibility {
    let enrolled = viewer.is_enrolled();
    let staff = viewer.is_staff();
    let outline = enrolled || staff;
    let welcome_message = outline && flags.unified_course_tab;
    let needs_upgrade = enrolled && viewer.enrollment_mode() != Some(EnrollmentMode::Verified);
    let upgrade_candidate = needs_upgrade || (staff && !enrolled);
    let upgrade_sock = upgrade_candidate && course.upgrade_open(now);
    ContentVisibility {
        outline,
        welcome_message,
        upgrade_sock,
    }
}

/// Whole days from `now` until `start`, floored at zero.
fn days_until(now: OffsetDateTime, start: OffsetDateTime) -> i64 {
    (start - now).whole_days().max(0)
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Evaluation failures.
///
/// Both variants mean the page cannot be decided for this request; hosts
/// render a not-found page rather than redirecting.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The course key matched no course in the store.
    #[error("course not found: {course_key}")]
    CourseNotFound {
        /// Key that matched nothing.
        course_key: CourseKey,
    },
    /// The course store could not be read.
    #[error("course store failure")]
    Store(#[from] StoreError),
}

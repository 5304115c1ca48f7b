// crates/course-gate-core/src/core/decision.rs
// ============================================================================
// Module: Course Gate Access Decisions
// Description: Decision outcomes, home messages, redirects, and traces.
// Purpose: Capture everything the rendering layer needs from one evaluation.
// Dependencies: crate::core::identifiers, serde, time, url
// ============================================================================

//! ## Overview
//! An access decision is computed fresh per request and owns no persistent
//! state. It tells the rendering layer whether the viewer may see the page,
//! which single informational message to show, whether to redirect instead,
//! and which page sections to reveal. The trace records which ladder rule
//! fired so hosts can log and replay decisions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;
use url::form_urlencoded;

use crate::core::identifiers::CourseKey;

// ============================================================================
// SECTION: Access Decision
// ============================================================================

/// Outcome of one course-home access evaluation.
///
/// # Invariants
/// - Exactly one message kind per decision (enum construction).
/// - `redirect` is present exactly when `allowed` is false.
/// - Identical inputs produce identical decisions, trace included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    /// Whether the viewer may see the course home page.
    pub allowed: bool,
    /// Informational message to present, if any.
    pub message: HomeMessage,
    /// Redirect the host should issue instead of rendering.
    pub redirect: Option<RedirectTarget>,
    /// Page sections the rendering layer should reveal.
    pub visibility: ContentVisibility,
    /// Structured record of how the decision was reached.
    pub trace: DecisionTrace,
}

// ============================================================================
// SECTION: Home Messages
// ============================================================================

/// Informational message kinds, for programmatic matching.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// No message.
    None,
    /// Prompt the viewer to sign in.
    LoginPrompt,
    /// Prompt the viewer to enroll.
    EnrollPrompt,
    /// Count down to the course start.
    PreStartCountdown,
}

/// The single informational message a decision may carry.
///
/// # Invariants
/// - Variants are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HomeMessage {
    /// No message.
    None,
    /// Prompt the viewer to sign in, returning to the course home afterwards.
    LoginPrompt {
        /// Login path with a percent-encoded `next` parameter.
        login_url: String,
    },
    /// Prompt the viewer to enroll in the course.
    EnrollPrompt {
        /// Course the enrollment call to action targets.
        course_key: CourseKey,
    },
    /// Tell an enrolled viewer when the course begins.
    PreStartCountdown {
        /// Localized start date for display.
        start_display: String,
        /// Whole days until the course starts (never negative).
        days_until_start: i64,
    },
}

impl HomeMessage {
    /// Returns the message kind.
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        match self {
            Self::None => MessageKind::None,
            Self::LoginPrompt {
                ..
            } => MessageKind::LoginPrompt,
            Self::EnrollPrompt {
                ..
            } => MessageKind::EnrollPrompt,
            Self::PreStartCountdown {
                ..
            } => MessageKind::PreStartCountdown,
        }
    }
}

// ============================================================================
// SECTION: Redirect Target
// ============================================================================

/// Redirect location with query parameters kept structured until rendering.
///
/// # Invariants
/// - `path` contains no query string; parameters live in `query`.
/// - Encoding happens once, in [`RedirectTarget::location`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectTarget {
    /// Redirect path (e.g., `/dashboard`).
    pub path: String,
    /// Query parameters as name/value pairs, in order.
    pub query: Vec<(String, String)>,
}

impl RedirectTarget {
    /// Creates a redirect target with no query parameters.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Renders the full redirect location with form-urlencoded parameters.
    ///
    /// Values are encoded as `application/x-www-form-urlencoded`: spaces
    /// become `+` and all other reserved or non-ASCII bytes are
    /// percent-encoded, so localized values survive intact.
    #[must_use]
    pub fn location(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.query {
            serializer.append_pair(name, value);
        }
        format!("{}?{}", self.path, serializer.finish())
    }
}

// ============================================================================
// SECTION: Content Visibility
// ============================================================================

/// Page sections the rendering layer should reveal.
///
/// # Invariants
/// - All fields are false on a redirect decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentVisibility {
    /// Course outline, including the start button.
    pub outline: bool,
    /// Welcome message on the unified course home.
    pub welcome_message: bool,
    /// Verified-certificate upgrade messaging.
    pub upgrade_sock: bool,
}

impl ContentVisibility {
    /// Returns visibility with every section hidden.
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            outline: false,
            welcome_message: false,
            upgrade_sock: false,
        }
    }
}

// ============================================================================
// SECTION: Decision Trace
// ============================================================================

/// Ladder rule that produced a decision.
///
/// # Invariants
/// - Variants are stable for serialization and log matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateRule {
    /// Course has not started and no override applies.
    StartDateRedirect,
    /// Viewer is anonymous.
    LoginPrompt,
    /// Viewer is known but neither enrolled nor staff.
    EnrollPrompt,
    /// Viewer is enrolled and the course has not begun.
    PreStartCountdown,
    /// No restriction applies.
    Open,
}

/// Structured record of one evaluation, suitable for host logs.
///
/// # Invariants
/// - `evaluated_at` is the caller-supplied request time, never wall clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTrace {
    /// Ladder rule that fired.
    pub rule: GateRule,
    /// Course the decision applies to.
    pub course_key: CourseKey,
    /// Request time the decision was computed against.
    #[serde(with = "time::serde::rfc3339")]
    pub evaluated_at: OffsetDateTime,
}

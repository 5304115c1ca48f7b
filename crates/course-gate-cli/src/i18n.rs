// crates/course-gate-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Provides message catalogs and translation utilities for the CLI.
// Purpose: Centralize user-facing strings for English and Catalan output.
// Dependencies: course-gate-core, standard library collections
// ============================================================================

//! ## Overview
//! The course gate CLI stores user-facing strings in per-locale translation
//! catalogs and routes all runtime output through the [`t!`](crate::t) macro.
//! The active locale is selected once at startup; Catalan entries are
//! machine-translated and fall back to English when a key is missing.
//!
//! ## Invariants
//! - Catalogs are initialized once and read-only thereafter.
//! - Missing keys fall back to the English entry, then to the key itself.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

use course_gate_core::Locale;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A formatted message argument captured by the [`macro@crate::t`] macro.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"path"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Catalogs
// ============================================================================

/// Static English catalog entries loaded into the localized message bundle.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "course-gate {version}"),
    (
        "i18n.disclaimer.machine_translated",
        "Note: localized output is machine-translated; English output is authoritative.",
    ),
    ("i18n.locale.invalid_env", "Invalid value for {env}: {value}. Expected en or ca."),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    (
        "input.read_too_large",
        "Refusing to read {kind} at {path} because it is {size} bytes (limit {limit}).",
    ),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config valid."),
    ("evaluate.kind.catalog", "course catalog"),
    ("evaluate.catalog.read_failed", "Failed to read course catalog at {path}: {error}"),
    ("evaluate.catalog.parse_failed", "Failed to parse course catalog JSON at {path}: {error}"),
    ("evaluate.catalog.invalid", "Course catalog validation failed: {error}"),
    ("evaluate.course_key.invalid", "Invalid course key {key}: {error}"),
    ("evaluate.now.invalid", "Invalid --now timestamp {value}: {error}"),
    ("evaluate.user_id.invalid", "Invalid --user-id {value}: user ids must be positive."),
    ("evaluate.routes.invalid", "Route table rejected: {error}"),
    ("evaluate.course.not_found", "Course not found: {course_key}"),
    ("evaluate.store_failed", "Course lookup failed: {error}"),
    ("evaluate.serialize_failed", "Failed to serialize decision: {error}"),
];

/// Static Catalan catalog entries mirroring [`CATALOG_EN`] key for key.
const CATALOG_CA: &[(&str, &str)] = &[
    ("main.version", "course-gate {version}"),
    (
        "i18n.disclaimer.machine_translated",
        "Avís: la sortida localitzada és una traducció automàtica; la versió anglesa és \
         l'autoritativa.",
    ),
    ("i18n.locale.invalid_env", "El valor de {env} no és vàlid: {value}. S'esperava en o ca."),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "sortida"),
    ("output.write_failed", "No s'ha pogut escriure a {stream}: {error}"),
    (
        "input.read_too_large",
        "Es rebutja llegir {kind} a {path} perquè ocupa {size} bytes (límit {limit}).",
    ),
    ("config.load_failed", "No s'ha pogut carregar la configuració: {error}"),
    ("config.validate.ok", "La configuració és vàlida."),
    ("evaluate.kind.catalog", "catàleg de cursos"),
    (
        "evaluate.catalog.read_failed",
        "No s'ha pogut llegir el catàleg de cursos a {path}: {error}",
    ),
    (
        "evaluate.catalog.parse_failed",
        "No s'ha pogut analitzar el JSON del catàleg de cursos a {path}: {error}",
    ),
    ("evaluate.catalog.invalid", "La validació del catàleg de cursos ha fallat: {error}"),
    ("evaluate.course_key.invalid", "La clau de curs {key} no és vàlida: {error}"),
    ("evaluate.now.invalid", "La marca de temps de --now {value} no és vàlida: {error}"),
    (
        "evaluate.user_id.invalid",
        "El valor de --user-id {value} no és vàlid: els identificadors d'usuari han de ser \
         positius.",
    ),
    ("evaluate.routes.invalid", "La taula de rutes s'ha rebutjat: {error}"),
    ("evaluate.course.not_found", "No s'ha trobat el curs: {course_key}"),
    ("evaluate.store_failed", "La consulta del curs ha fallat: {error}"),
    ("evaluate.serialize_failed", "No s'ha pogut serialitzar la decisió: {error}"),
];

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Locale applied to all translations after startup.
static ACTIVE_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Selects the locale used by [`translate`]. Later calls are ignored.
pub fn set_locale(locale: Locale) {
    let _ = ACTIVE_LOCALE.set(locale);
}

/// Returns the active locale, defaulting to English.
#[must_use]
pub fn active_locale() -> Locale {
    ACTIVE_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` in the active locale while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let localized = match active_locale() {
        Locale::En => english().get(key).copied(),
        Locale::Ca => catalan().get(key).copied(),
    };
    let template = localized.or_else(|| english().get(key).copied()).unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

/// Returns the static English catalog used by the CLI.
fn english() -> &'static HashMap<&'static str, &'static str> {
    static CATALOG: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

    CATALOG.get_or_init(|| CATALOG_EN.iter().copied().collect())
}

/// Returns the static Catalan catalog used by the CLI.
fn catalan() -> &'static HashMap<&'static str, &'static str> {
    static CATALOG: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

    CATALOG.get_or_init(|| CATALOG_CA.iter().copied().collect())
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A localized [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use std::collections::HashMap;

    use super::CATALOG_CA;
    use super::CATALOG_EN;
    use super::translate;

    /// Extracts `{name}` placeholders from a message template.
    fn placeholders(template: &str) -> Vec<&str> {
        let mut found = Vec::new();
        let mut rest = template;
        while let Some(start) = rest.find('{') {
            let Some(close) = rest[start..].find('}') else {
                break;
            };
            found.push(&rest[start + 1..start + close]);
            rest = &rest[start + close + 1..];
        }
        found
    }

    #[test]
    fn catalan_catalog_covers_english_keys() {
        let catalan: HashMap<&str, &str> = CATALOG_CA.iter().copied().collect();
        for (key, _) in CATALOG_EN {
            assert!(catalan.contains_key(key), "missing Catalan entry for {key}");
        }
    }

    #[test]
    fn english_catalog_covers_catalan_keys() {
        let english: HashMap<&str, &str> = CATALOG_EN.iter().copied().collect();
        for (key, _) in CATALOG_CA {
            assert!(english.contains_key(key), "missing English entry for {key}");
        }
    }

    #[test]
    fn catalan_templates_keep_placeholders() {
        let catalan: HashMap<&str, &str> = CATALOG_CA.iter().copied().collect();
        for (key, template) in CATALOG_EN {
            let translated = catalan.get(key).expect("catalog parity");
            for name in placeholders(template) {
                let placeholder = format!("{{{name}}}");
                assert!(
                    translated.contains(&placeholder),
                    "Catalan entry for {key} drops {placeholder}"
                );
            }
        }
    }

    #[test]
    fn translate_substitutes_named_arguments() {
        let message = crate::t!("evaluate.course.not_found", course_key = "course-v1:edX+Demo+1");
        assert_eq!(message, "Course not found: course-v1:edX+Demo+1");
    }

    #[test]
    fn translate_falls_back_to_key_for_unknown_entries() {
        assert_eq!(translate("no.such.key", vec![]), "no.such.key");
    }
}

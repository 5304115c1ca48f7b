//! Config defaults and section parsing tests for course-gate-config.
// crates/course-gate-config/tests/config_defaults.rs
// =============================================================================
// Module: Config Defaults and Section Parsing Tests
// Description: Validate default behavior and strict section parsing.
// Purpose: Ensure minimal config is valid and unknown keys are rejected.
// =============================================================================

use course_gate_config::ConfigError;
use course_gate_config::GateConfig;
use course_gate_core::Locale;

type TestResult = Result<(), String>;

/// Parses a TOML string into a `GateConfig` for tests.
fn config_from_toml(toml_str: &str) -> Result<GateConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

fn assert_invalid(result: Result<(), ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(()) => Err("expected invalid config".to_string()),
    }
}

#[test]
fn default_config_validates() -> TestResult {
    GateConfig::default().validate().map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn empty_toml_matches_defaults() -> TestResult {
    let config = config_from_toml("").map_err(|err| err.to_string())?;
    if config != GateConfig::default() {
        return Err("empty TOML should yield the default config".to_string());
    }
    Ok(())
}

#[test]
fn flags_default_to_gated_access() -> TestResult {
    let config = GateConfig::default();
    if config.flags.disable_start_dates {
        return Err("flags.disable_start_dates should default to false".to_string());
    }
    if config.flags.pre_start_access {
        return Err("flags.pre_start_access should default to false".to_string());
    }
    if !config.flags.unified_course_tab {
        return Err("flags.unified_course_tab should default to true".to_string());
    }
    Ok(())
}

#[test]
fn locale_defaults_to_english() -> TestResult {
    let config = GateConfig::default();
    if config.locale.language != Locale::En {
        return Err("locale.language should default to en".to_string());
    }
    Ok(())
}

#[test]
fn locale_section_parses_catalan() -> TestResult {
    let config =
        config_from_toml("[locale]\nlanguage = \"ca\"\n").map_err(|err| err.to_string())?;
    if config.locale.language != Locale::Ca {
        return Err("locale.language should parse ca".to_string());
    }
    Ok(())
}

#[test]
fn partial_sections_keep_other_defaults() -> TestResult {
    let config =
        config_from_toml("[flags]\npre_start_access = true\n").map_err(|err| err.to_string())?;
    if !config.flags.pre_start_access {
        return Err("flags.pre_start_access should be set".to_string());
    }
    if config.routes != GateConfig::default().routes {
        return Err("routes should keep their defaults".to_string());
    }
    if config.locale.language != Locale::En {
        return Err("locale should keep its default".to_string());
    }
    Ok(())
}

#[test]
fn unknown_top_level_key_rejected() -> TestResult {
    if config_from_toml("courses = 3\n").is_ok() {
        return Err("unknown top-level key should be rejected".to_string());
    }
    Ok(())
}

#[test]
fn unknown_flags_key_rejected() -> TestResult {
    if config_from_toml("[flags]\nhidden = true\n").is_ok() {
        return Err("unknown flags key should be rejected".to_string());
    }
    Ok(())
}

#[test]
fn unknown_routes_key_rejected() -> TestResult {
    if config_from_toml("[routes]\nhome = \"/home\"\n").is_ok() {
        return Err("unknown routes key should be rejected".to_string());
    }
    Ok(())
}

#[test]
fn unsupported_locale_rejected() -> TestResult {
    let result = config_from_toml("[locale]\nlanguage = \"de\"\n");
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains("unsupported locale") {
                Ok(())
            } else {
                Err(format!("error {message} did not name the locale"))
            }
        }
        Ok(_) => Err("unsupported locale should be rejected".to_string()),
    }
}

#[test]
fn relative_route_fails_validation() -> TestResult {
    let config = config_from_toml("[routes]\ndashboard_path = \"dashboard\"\n")
        .map_err(|err| err.to_string())?;
    assert_invalid(config.validate(), "must be absolute")?;
    Ok(())
}

#[test]
fn template_without_placeholder_fails_validation() -> TestResult {
    let config = config_from_toml("[routes]\ncourse_home_template = \"/courses/home/\"\n")
        .map_err(|err| err.to_string())?;
    assert_invalid(config.validate(), "course home template")?;
    Ok(())
}

// crates/course-gate-cli/src/main.rs
// ============================================================================
// Module: Course Gate CLI
// Description: Command-line interface for course-home access evaluation.
// Purpose: Evaluate access decisions and validate deployment config files.
// Dependencies: clap, course-gate-config, course-gate-core, serde_json, time
// ============================================================================

//! ## Overview
//! The `course-gate` binary answers one question from the command line: may
//! this viewer see this course home page right now? The `evaluate` command
//! loads a course catalog from JSON, replays the access rules at a supplied
//! timestamp, and prints the resulting decision as JSON. The `config`
//! subcommands validate deployment configuration files.
//!
//! All user-facing output is routed through the localized message catalog in
//! [`course_gate_cli::i18n`].

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use course_gate_cli::i18n::active_locale;
use course_gate_cli::i18n::set_locale;
use course_gate_cli::t;
use course_gate_config::GateConfig;
use course_gate_core::AccessError;
use course_gate_core::AccessFlags;
use course_gate_core::AccessGate;
use course_gate_core::AccessRequest;
use course_gate_core::CatalogDateLocalizer;
use course_gate_core::CourseCatalog;
use course_gate_core::CourseKey;
use course_gate_core::EnrollmentMode;
use course_gate_core::InMemoryCourseStore;
use course_gate_core::KnownViewer;
use course_gate_core::Locale;
use course_gate_core::UserId;
use course_gate_core::Viewer;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of a course catalog JSON input.
const MAX_CATALOG_BYTES: usize = 1024 * 1024;
/// Environment variable for CLI locale selection.
const LOCALE_ENV: &str = "COURSE_GATE_LOCALE";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "course-gate", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output locale (overrides `COURSE_GATE_LOCALE`).
    #[arg(long, value_enum, value_name = "LOCALE", global = true)]
    locale: Option<LocaleArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate course-home access for one viewer and course.
    Evaluate(EvaluateCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a course gate configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to course-gate.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for access evaluation.
#[derive(Args, Debug)]
struct EvaluateCommand {
    /// Path to the course catalog JSON file.
    #[arg(long, value_name = "PATH")]
    catalog: PathBuf,
    /// Course key to evaluate (namespaced or legacy form).
    #[arg(long, value_name = "KEY")]
    course: String,
    /// Relationship between the viewer and the course.
    #[arg(long, value_enum, value_name = "VIEWER")]
    viewer: ViewerArg,
    /// Enrollment mode for enrolled viewers (staff may also carry one).
    #[arg(long, value_enum, value_name = "MODE")]
    mode: Option<ModeArg>,
    /// User id for signed-in viewers.
    #[arg(long, value_name = "ID", default_value_t = 1)]
    user_id: u64,
    /// Evaluation instant as an RFC 3339 timestamp.
    #[arg(long, value_name = "RFC3339")]
    now: String,
    /// Admit this viewer before the course start date.
    #[arg(long, action = ArgAction::SetTrue)]
    early_access: bool,
    /// Enable the platform-wide early access flag for this evaluation.
    #[arg(long, action = ArgAction::SetTrue)]
    pre_start_access: bool,
    /// Disable start-date gating entirely for this evaluation.
    #[arg(long, action = ArgAction::SetTrue)]
    disable_start_dates: bool,
    /// Hide the welcome message by disabling the unified course tab.
    #[arg(long, action = ArgAction::SetTrue)]
    no_unified_tab: bool,
    /// Optional config file path (defaults to course-gate.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Viewer relationship selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum ViewerArg {
    /// Signed-out viewer.
    Anonymous,
    /// Signed-in viewer enrolled in the course.
    Enrolled,
    /// Signed-in viewer without an enrollment.
    Unenrolled,
    /// Course staff member.
    Staff,
}

/// Enrollment mode selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum ModeArg {
    /// Free audit track.
    Audit,
    /// Legacy honor track.
    Honor,
    /// Paid verified track.
    Verified,
}

/// Supported CLI locale selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LocaleArg {
    /// English output.
    En,
    /// Catalan output.
    Ca,
}

impl From<ModeArg> for EnrollmentMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Audit => Self::Audit,
            ModeArg::Honor => Self::Honor,
            ModeArg::Verified => Self::Verified,
        }
    }
}

impl From<LocaleArg> for Locale {
    fn from(value: LocaleArg) -> Self {
        match value {
            LocaleArg::En => Self::En,
            LocaleArg::Ca => Self::Ca,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_locale = std::env::var(LOCALE_ENV).ok();
    let explicit = resolve_locale(cli.locale, env_locale.as_deref())?;
    if let Some(locale) = explicit {
        apply_locale(locale)?;
    }

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Evaluate(command) => command_evaluate(&command, explicit.is_none()),
        Commands::Config {
            command,
        } => command_config(command, explicit.is_none()),
    }
}

// ============================================================================
// SECTION: Evaluate Command
// ============================================================================

/// Executes the `evaluate` command.
fn command_evaluate(command: &EvaluateCommand, locale_from_config: bool) -> CliResult<ExitCode> {
    let config = GateConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    if locale_from_config {
        apply_locale(config.locale.language)?;
    }

    let flags = apply_flag_switches(config.flags, command);
    let now = parse_now(&command.now)?;
    let course_key = CourseKey::parse(&command.course).map_err(|err| {
        CliError::new(t!("evaluate.course_key.invalid", key = command.course, error = err))
    })?;
    let viewer = build_viewer(command)?;
    let catalog = read_catalog(&command.catalog)?;
    catalog
        .validate()
        .map_err(|err| CliError::new(t!("evaluate.catalog.invalid", error = err)))?;

    let store = InMemoryCourseStore::with_catalog(catalog);
    let localizer = CatalogDateLocalizer::new(active_locale());
    let gate = AccessGate::new(store, localizer, config.routes, flags)
        .map_err(|err| CliError::new(t!("evaluate.routes.invalid", error = err)))?;
    let request = AccessRequest {
        viewer,
        course_key,
        now,
        early_access_override: command.early_access,
    };
    let decision = match gate.evaluate(&request) {
        Ok(decision) => decision,
        Err(AccessError::CourseNotFound {
            course_key,
        }) => {
            return Err(CliError::new(t!("evaluate.course.not_found", course_key = course_key)));
        }
        Err(AccessError::Store(err)) => {
            return Err(CliError::new(t!("evaluate.store_failed", error = err)));
        }
    };

    let rendered = serde_json::to_string_pretty(&decision)
        .map_err(|err| CliError::new(t!("evaluate.serialize_failed", error = err)))?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Applies evaluate flag switches on top of configured defaults.
const fn apply_flag_switches(base: AccessFlags, command: &EvaluateCommand) -> AccessFlags {
    AccessFlags {
        disable_start_dates: base.disable_start_dates || command.disable_start_dates,
        pre_start_access: base.pre_start_access || command.pre_start_access,
        unified_course_tab: base.unified_course_tab && !command.no_unified_tab,
    }
}

/// Parses the `--now` argument as an RFC 3339 timestamp.
fn parse_now(value: &str) -> CliResult<OffsetDateTime> {
    OffsetDateTime::parse(value, &Rfc3339)
        .map_err(|err| CliError::new(t!("evaluate.now.invalid", value = value, error = err)))
}

/// Builds the viewer for an evaluate invocation.
///
/// The `--mode` argument only applies to viewers that can hold an
/// enrollment; unenrolled viewers ignore it.
fn build_viewer(command: &EvaluateCommand) -> CliResult<Viewer> {
    match command.viewer {
        ViewerArg::Anonymous => Ok(Viewer::Anonymous),
        ViewerArg::Enrolled => Ok(Viewer::Known(KnownViewer {
            user_id: parse_user_id(command.user_id)?,
            enrollment: Some(command.mode.map_or(EnrollmentMode::Audit, EnrollmentMode::from)),
            course_staff: false,
        })),
        ViewerArg::Unenrolled => Ok(Viewer::Known(KnownViewer {
            user_id: parse_user_id(command.user_id)?,
            enrollment: None,
            course_staff: false,
        })),
        ViewerArg::Staff => Ok(Viewer::Known(KnownViewer {
            user_id: parse_user_id(command.user_id)?,
            enrollment: command.mode.map(EnrollmentMode::from),
            course_staff: true,
        })),
    }
}

/// Converts the raw `--user-id` argument into a typed id.
fn parse_user_id(value: u64) -> CliResult<UserId> {
    UserId::from_raw(value)
        .ok_or_else(|| CliError::new(t!("evaluate.user_id.invalid", value = value)))
}

/// Reads and parses the course catalog with a hard size limit.
fn read_catalog(path: &Path) -> CliResult<CourseCatalog> {
    let bytes = read_bytes_with_limit(path, MAX_CATALOG_BYTES).map_err(|err| match err {
        ReadLimitError::Io(err) => CliError::new(t!(
            "evaluate.catalog.read_failed",
            path = path.display(),
            error = err
        )),
        ReadLimitError::TooLarge {
            size,
            limit,
        } => CliError::new(t!(
            "input.read_too_large",
            kind = t!("evaluate.kind.catalog"),
            path = path.display(),
            size = size,
            limit = limit
        )),
    })?;
    serde_json::from_slice(&bytes).map_err(|err| {
        CliError::new(t!("evaluate.catalog.parse_failed", path = path.display(), error = err))
    })
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand, locale_from_config: bool) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command, locale_from_config),
    }
}

/// Executes the config validation command.
fn command_config_validate(
    command: &ConfigValidateCommand,
    locale_from_config: bool,
) -> CliResult<ExitCode> {
    let config = GateConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    if locale_from_config {
        apply_locale(config.locale.language)?;
    }
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Locale Helpers
// ============================================================================

/// Resolves the CLI locale from the flag or environment.
///
/// Returns `None` when neither source selects one, letting the loaded
/// configuration supply the locale instead.
fn resolve_locale(
    locale: Option<LocaleArg>,
    env_locale: Option<&str>,
) -> CliResult<Option<Locale>> {
    if let Some(locale) = locale {
        return Ok(Some(locale.into()));
    }
    if let Some(value) = env_locale {
        return match Locale::parse(value) {
            Some(locale) => Ok(Some(locale)),
            None => Err(CliError::new(t!(
                "i18n.locale.invalid_env",
                env = LOCALE_ENV,
                value = value
            ))),
        };
    }
    Ok(None)
}

/// Activates a locale and emits the machine-translation disclaimer.
fn apply_locale(locale: Locale) -> CliResult<()> {
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Errors returned by bounded file reads.
#[derive(Debug)]
enum ReadLimitError {
    /// File I/O failure.
    Io(std::io::Error),
    /// File size exceeds the configured limit.
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let metadata = file.metadata().map_err(ReadLimitError::Io)?;
    let size = metadata.len();
    let limit = u64::try_from(max_bytes).map_err(|_| ReadLimitError::TooLarge {
        size,
        limit: max_bytes,
    })?;
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let read_limit = limit.saturating_add(1);
    let mut limited = file.take(read_limit);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        let actual = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        return Err(ReadLimitError::TooLarge {
            size: actual,
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

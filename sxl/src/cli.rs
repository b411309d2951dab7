//! Command line surface of the `sxl` binary: flags, environment overrides,
//! exit codes, and fatal diagnostics.

use std::time::Duration;

use clap::Parser;
use sxl_core::{FetchError, ResourceKind, Selection, SxlConfig, SxlError};

/// Environment variable overriding the API root.
pub const ENV_API_BASE: &str = "SXL_API_BASE";
/// Environment variable selecting `sequential` or `concurrent` dependent lookups.
pub const ENV_FETCH_STRATEGY: &str = "SXL_FETCH_STRATEGY";
/// Environment variable setting a per-request timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "SXL_TIMEOUT_SECS";

/// Exit code for success, help, and version output.
pub const EXIT_OK: u8 = 0;
/// Exit code for a launch fetch failure, a usage error, or bad configuration.
pub const EXIT_LAUNCH: u8 = 1;
/// Exit code for a launchpad fetch failure.
pub const EXIT_LAUNCHPAD: u8 = 2;
/// Exit code for a payload fetch failure.
pub const EXIT_PAYLOAD: u8 = 3;

/// Flags accepted by `sxl`.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(
    name = "sxl",
    about = "Obtain the 'latest' and 'next' SpaceX launches",
    disable_version_flag = true,
    after_help = "With neither --last nor --next (or with both) the latest and the next\nscheduled launch are shown, latest first.\n\nEnvironment:\n  SXL_API_BASE        API root (default https://api.spacexdata.com/v4)\n  SXL_FETCH_STRATEGY  sequential | concurrent\n  SXL_TIMEOUT_SECS    per-request timeout in seconds\n  RUST_LOG            diagnostics filter (default warn)"
)]
pub struct Cli {
    /// Show only the latest SpaceX launch
    #[arg(short = 'l', long = "last")]
    pub last: bool,

    /// Show only the next scheduled SpaceX launch
    #[arg(short = 'n', long = "next")]
    pub next: bool,

    /// Print version information and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,
}

impl Cli {
    /// Launch resources selected by the flags.
    #[must_use]
    pub const fn selection(&self) -> Selection {
        Selection::from_flags(self.last, self.next)
    }

    /// Assemble the run configuration from the flags and `lookup`, which
    /// resolves environment variables by name.
    ///
    /// Unset or blank variables keep the defaults.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unknown fetch strategy and `Config` for a
    /// timeout that is not a positive whole number of seconds.
    pub fn config<F>(&self, lookup: F) -> Result<SxlConfig, SxlError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut cfg = SxlConfig {
            selection: self.selection(),
            ..SxlConfig::default()
        };

        if let Some(base) = var(ENV_API_BASE) {
            cfg.api_base = base.trim().to_string();
        }
        if let Some(strategy) = var(ENV_FETCH_STRATEGY) {
            cfg.fetch_strategy = strategy.parse()?;
        }
        if let Some(secs) = var(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs
                .trim()
                .parse()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| {
                    SxlError::Config(format!(
                        "{ENV_TIMEOUT_SECS} must be a positive number of seconds, got '{secs}'"
                    ))
                })?;
            cfg.request_timeout = Some(Duration::from_secs(secs));
        }
        Ok(cfg)
    }
}

/// Text printed for `-v/--version`.
#[must_use]
pub fn version_text() -> String {
    format!(
        "{} version {}\n{}\nLicense: {}\nSource: {}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_LICENSE"),
        env!("CARGO_PKG_REPOSITORY"),
    )
}

/// Process exit code for a fatal error.
#[must_use]
pub const fn exit_code(err: &SxlError) -> u8 {
    match err.kind() {
        Some(ResourceKind::Payload) => EXIT_PAYLOAD,
        Some(ResourceKind::Launchpad) => EXIT_LAUNCHPAD,
        _ => EXIT_LAUNCH,
    }
}

/// Lines written to stderr before exiting on a fatal error.
#[must_use]
pub fn diagnostic(err: &SxlError) -> String {
    match err {
        SxlError::Fetch { kind, source } => {
            let detail = match source {
                FetchError::Status { status, reason, .. } => {
                    format!("Server response: '{reason}' (Code: '{status}')")
                }
                FetchError::Transport { url, msg } => format!("Request to '{url}' failed: {msg}"),
                FetchError::Decode { url, msg } => {
                    format!("Invalid JSON received from '{url}': {msg}")
                }
                other => other.to_string(),
            };
            format!("ERROR: unable to obtain website {kind} data\n{detail}\nExit.\n")
        }
        other => format!("ERROR: {other}\nExit.\n"),
    }
}

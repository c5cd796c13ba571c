// Collect-and-report flow behind the binary

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::error;

use crate::collector;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::logging::CRITICAL_TARGET;
use crate::models::HostFacts;
use crate::report;
use crate::sysinfo_repo::HostSource;

/// OS families the report is produced for.
pub const SUPPORTED_OS_FAMILIES: [&str; 2] = ["Windows", "Linux"];

/// Stand-in for the host name in the snapshot file name when the system section is missing.
const UNKNOWN_HOST: &str = "unknown";

/// What one successful run produced.
#[derive(Debug)]
pub struct RunOutput {
    pub snapshot_path: PathBuf,
    pub facts: HostFacts,
    /// The report stopped early because a section was not collected.
    pub missing: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    UnsupportedOs,
    Failed,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::UnsupportedOs | Status::Failed => ExitCode::FAILURE,
        }
    }
}

pub fn ensure_supported(os_family: &str) -> Result<()> {
    if SUPPORTED_OS_FAMILIES.contains(&os_family) {
        Ok(())
    } else {
        Err(Error::UnsupportedOs(os_family.to_string()))
    }
}

/// Gate on the OS family, collect host facts, save the JSON snapshot, then print the report to `out`.
///
/// Nothing is queried or written when the OS family is unsupported. A section missing at
/// render time is reported to `out` and does not fail the run.
pub fn run<S: HostSource, W: Write>(source: &S, config: &AppConfig, out: &mut W) -> Result<RunOutput> {
    ensure_supported(&source.os_family())?;

    let facts = collector::collect(source, &config.network);
    let host = facts
        .system
        .as_ref()
        .map_or(UNKNOWN_HOST, |s| s.computer_name.as_str());
    let snapshot_path = config
        .output
        .directory
        .join(report::snapshot_file_name(host));

    report::write_snapshot(&facts, &snapshot_path)?;
    writeln!(out, "\nData saved to file: {}", snapshot_path.display())?;

    let missing = match report::render(&facts, out) {
        Ok(()) => None,
        Err(Error::MissingField(section)) => {
            writeln!(out, "{}", Error::MissingField(section))?;
            Some(section)
        }
        Err(e) => return Err(e),
    };

    Ok(RunOutput {
        snapshot_path,
        facts,
        missing,
    })
}

/// [`run`] with every failure turned into a user-facing line on `out`.
pub fn execute<S: HostSource, W: Write>(source: &S, config: &AppConfig, out: &mut W) -> Status {
    match run(source, config, out) {
        Ok(_) => Status::Success,
        Err(e @ Error::UnsupportedOs(_)) => {
            let _ = writeln!(out, "{}", e);
            Status::UnsupportedOs
        }
        Err(e) => {
            error!(target: CRITICAL_TARGET, "Critical error: {}", e);
            let _ = writeln!(out, "{}", failure_message(config));
            Status::Failed
        }
    }
}

/// Generic line shown for unexpected failures, pointing at the log file.
pub fn failure_message(config: &AppConfig) -> String {
    format!(
        "Execution failed. See {}.",
        config.logging.file.display()
    )
}

// Process-wide log file: "<timestamp> - <LEVEL> - <message>" lines, appended.

use std::fmt;
use std::path::Path;

use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::config::LoggingConfig;

/// Events on this target are written with the CRITICAL label.
pub const CRITICAL_TARGET: &str = "critical";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Single-line event format with a local timestamp and no span context.
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} - {} - ",
            Local::now().format(TIMESTAMP_FORMAT),
            level_label(meta.level(), meta.target())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_label(level: &Level, target: &str) -> &'static str {
    if target == CRITICAL_TARGET {
        return "CRITICAL";
    }
    match *level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        _ => "TRACE",
    }
}

/// Install the global subscriber writing to `config.file`. Call once, before collection starts.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let dir = config
        .file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = config
        .file
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log file has no name: {}", config.file.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(dir)
        .map_err(|e| anyhow::anyhow!("open {}: {}", config.file.display(), e))?;
    let filter = EnvFilter::try_new(&config.level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .event_format(LineFormat)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logger init: {}", e))
}

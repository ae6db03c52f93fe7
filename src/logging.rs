//! Logging setup
//!
//! Installs a `tracing` subscriber driven by the `log_level` and `log_format`
//! configuration fields. `RUST_LOG`, when set, takes precedence over
//! `log_level`. Output goes to stderr.

use crate::config::ServerConfig;
use crate::error::{AppError, Result};
use std::fmt::{self, Write as _};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Subscriber, warn};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, fmt as tfmt, prelude::*};

/// `log_format` value selecting structured JSON output
pub const JSON_FORMAT: &str = "json";

/// Install the global subscriber for `config`.
pub fn init(config: &ServerConfig) -> Result<()> {
    let level = parse_level(&config.log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(level.unwrap_or(LevelFilter::INFO).into())
    });

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.log_format.eq_ignore_ascii_case(JSON_FORMAT) {
        registry
            .with(tfmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                tfmt::layer()
                    .event_format(TemplateFormat::parse(&config.log_format))
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    installed.map_err(|e| AppError::Logging(e.to_string()))?;

    if level.is_none() {
        warn!(value = %config.log_level, "Unknown log level, using INFO");
    }

    Ok(())
}

/// Parse a level name, ignoring case.
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}

/// One piece of a log line template
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Timestamp,
    Target,
    Level,
    Message,
}

/// Event formatter rendering a `{placeholder}` template.
///
/// Recognized placeholders are `{timestamp}`, `{target}`, `{level}` and
/// `{message}`; `{message}` includes the event's structured fields. Anything
/// else is written out verbatim.
#[derive(Debug, Clone)]
pub struct TemplateFormat {
    segments: Vec<Segment>,
}

impl TemplateFormat {
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            literal.push_str(&rest[..start]);
            let tail = &rest[start..];

            let Some(end) = tail.find('}') else {
                literal.push_str(tail);
                rest = "";
                break;
            };
            let placeholder = match &tail[1..end] {
                "timestamp" => Some(Segment::Timestamp),
                "target" => Some(Segment::Target),
                "level" => Some(Segment::Level),
                "message" => Some(Segment::Message),
                _ => None,
            };

            match placeholder {
                Some(segment) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                }
                None => literal.push_str(&tail[..=end]),
            }
            rest = &tail[end + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }
}

impl<S, N> FormatEvent<S, N> for TemplateFormat
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
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => writer.write_str(text)?,
                Segment::Timestamp => SystemTime.format_time(&mut writer)?,
                Segment::Target => writer.write_str(meta.target())?,
                Segment::Level => write!(writer, "{}", meta.level())?,
                Segment::Message => ctx.format_fields(writer.by_ref(), event)?,
            }
        }
        writeln!(writer)
    }
}

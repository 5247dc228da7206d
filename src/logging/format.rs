// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! envdir log line format.
//!
//! ```text
//! 2019-09-08 10:47:42.000 +03:00 [X] ENVDIR:\tmessage key=value
//! |                  |   |      |   |
//! local time     .000  offset  pid  tag
//!                              placeholder
//! ```

use std::fmt;

use chrono::{DateTime, Local, TimeZone};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Static stand-in for the process id column.
pub const PROCESS_TAG: &str = "[X]";

/// Literal tag identifying envdir lines.
pub const LOG_TAG: &str = "ENVDIR:";

/// Renders the prefix of a log line for the given instant.
///
/// Sub-second precision is not meaningful and always shows as `.000`.
#[must_use]
pub fn line_prefix<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!(
        "{} {PROCESS_TAG} {LOG_TAG}\t",
        now.format("%Y-%m-%d %H:%M:%S.000 %Z")
    )
}

/// Event formatter writing one envdir line per event.
///
/// Errors are written bare, other levels carry their level name.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvdirFormat;

impl<S, N> FormatEvent<S, N> for EnvdirFormat
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
        write!(writer, "{}", line_prefix(&Local::now()))?;
        let level = *event.metadata().level();
        if level != Level::ERROR {
            write!(writer, "{level} ")?;
        }
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

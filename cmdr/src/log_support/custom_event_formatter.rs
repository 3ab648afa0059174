/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Log entries laid out for reading in a terminal (`tail -f log.txt`).
//!
//! ```text
//! <timestamp> [span] <level_sigil>: <message>
//!   • <field_name>
//!     <field_value>
//! ────────────────────────────────────────
//! ```
//!
//! The `message` field is the heading, every other field is a body entry. Call sites
//! follow this convention:
//!
//! ```
//! // % is Display, ? is Debug.
//! tracing::debug!(message = "load applied", count = 23);
//! ```

use std::fmt;

use chrono::Local;
use crossterm::style::{Color, Stylize};
use tracing::{Event, Subscriber,
              field::{Field, Visit}};
use tracing_subscriber::{fmt::{FmtContext, FormatEvent, FormatFields, format::Writer},
                         registry::LookupSpan};

/// This is the "marker" struct that is used to register this formatter with the
/// `tracing_subscriber` crate.
#[derive(Debug, Default)]
pub struct CustomEventFormatter;

// Colors: <https://en.wikipedia.org/wiki/ANSI_escape_code>
#[rustfmt::skip]
pub mod custom_event_formatter_constants {
    use super::Color;

    pub const FIRST_LINE_PREFIX: &str = "  • ";
    pub const SUBSEQUENT_LINE_PREFIX: &str = "    ";
    pub const LEVEL_SUFFIX: &str = ":";

    pub const ERROR_SIGIL: &str = "E";
    pub const WARN_SIGIL: &str = "W";
    pub const INFO_SIGIL: &str = "I";
    pub const DEBUG_SIGIL: &str = "D";
    pub const TRACE_SIGIL: &str = "T";

    pub const ENTRY_SEPARATOR_CHAR: &str = "─";
    pub const ENTRY_SEPARATOR_WIDTH: usize = 90;

    pub const BODY_FG_COLOR: Color =        Color::Rgb { r: 175, g: 175, b: 175 };
    pub const BODY_FG_COLOR_BRIGHT: Color = Color::Rgb { r: 200, g: 200, b: 200 };
    pub const HEADING_BG_COLOR: Color =     Color::Rgb { r: 70,  g: 70,  b: 90  };
    pub const INFO_FG_COLOR: Color =        Color::Rgb { r: 233, g: 150, b: 122 };
    pub const ERROR_FG_COLOR: Color =       Color::Rgb { r: 255, g: 182, b: 193 };
    pub const WARN_FG_COLOR: Color =        Color::Rgb { r: 255, g: 140, b: 0   };
    pub const DEBUG_FG_COLOR: Color =       Color::Rgb { r: 255, g: 255, b: 0   };
    pub const TRACE_FG_COLOR: Color =       Color::Rgb { r: 186, g: 85,  b: 211 };
    pub const SEPARATOR_FG_COLOR: Color =   Color::Rgb { r: 20,  g: 150, b: 60  };
}

use custom_event_formatter_constants::{BODY_FG_COLOR, BODY_FG_COLOR_BRIGHT, DEBUG_FG_COLOR,
                                       DEBUG_SIGIL, ENTRY_SEPARATOR_CHAR,
                                       ENTRY_SEPARATOR_WIDTH, ERROR_FG_COLOR, ERROR_SIGIL,
                                       FIRST_LINE_PREFIX, HEADING_BG_COLOR, INFO_FG_COLOR,
                                       INFO_SIGIL, LEVEL_SUFFIX, SEPARATOR_FG_COLOR,
                                       SUBSEQUENT_LINE_PREFIX, TRACE_FG_COLOR, TRACE_SIGIL,
                                       WARN_FG_COLOR, WARN_SIGIL};

mod helpers {
    use super::{BODY_FG_COLOR_BRIGHT, Color, DEBUG_FG_COLOR, DEBUG_SIGIL, ERROR_FG_COLOR,
                ERROR_SIGIL, Event, FmtContext, FormatFields, HEADING_BG_COLOR,
                INFO_FG_COLOR, INFO_SIGIL, LEVEL_SUFFIX, Local, LookupSpan, Stylize,
                Subscriber, TRACE_FG_COLOR, TRACE_SIGIL, WARN_FG_COLOR, WARN_SIGIL, Writer,
                fmt};

    pub fn write_timestamp(f: &mut Writer<'_>) -> fmt::Result {
        let timestamp = format!(" {} ", Local::now().format("%I:%M%P"));
        write!(
            f,
            "\n{}",
            timestamp
                .with(BODY_FG_COLOR_BRIGHT)
                .on(HEADING_BG_COLOR)
                .italic()
        )
    }

    pub fn write_span_context<S, N>(
        ctx: &FmtContext<'_, S, N>,
        f: &mut Writer<'_>,
    ) -> fmt::Result
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
        N: for<'a> FormatFields<'a> + 'static,
    {
        match ctx.lookup_current() {
            Some(scope) => {
                let scope_str = format!("[{}] ", scope.name());
                write!(
                    f,
                    "{}",
                    scope_str
                        .with(BODY_FG_COLOR_BRIGHT)
                        .on(HEADING_BG_COLOR)
                        .italic()
                )
            }
            None => Ok(()),
        }
    }

    #[rustfmt::skip]
    pub fn get_level_info(level: tracing::Level) -> (&'static str, Color) {
        match level {
            tracing::Level::ERROR => (ERROR_SIGIL, ERROR_FG_COLOR),
            tracing::Level::WARN =>  (WARN_SIGIL,  WARN_FG_COLOR),
            tracing::Level::INFO =>  (INFO_SIGIL,  INFO_FG_COLOR),
            tracing::Level::DEBUG => (DEBUG_SIGIL, DEBUG_FG_COLOR),
            tracing::Level::TRACE => (TRACE_SIGIL, TRACE_FG_COLOR),
        }
    }

    pub fn write_log_level(f: &mut Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let (sigil, color) = get_level_info(*event.metadata().level());
        let level_str = format!("{sigil}{LEVEL_SUFFIX} ");
        write!(f, "{}", level_str.with(color).on(HEADING_BG_COLOR).bold())
    }
}

impl<S, N> FormatEvent<S, N> for CustomEventFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    /// Format the event into a heading line (timestamp, span context, level, message)
    /// followed by one entry per remaining field, and a separator line.
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut f: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        helpers::write_timestamp(&mut f)?;
        helpers::write_span_context(ctx, &mut f)?;
        helpers::write_log_level(&mut f, event)?;

        let mut fields = VisitEventAndCollectFields::default();
        event.record(&mut fields);

        writeln!(f, " {}", fields.heading.as_str().bold())?;
        for (name, value) in &fields.body {
            if value.is_empty() {
                continue;
            }
            writeln!(f, "{FIRST_LINE_PREFIX}{}", name.as_str().with(BODY_FG_COLOR_BRIGHT))?;
            for line in value.lines() {
                writeln!(f, "{SUBSEQUENT_LINE_PREFIX}{}", line.with(BODY_FG_COLOR))?;
            }
        }

        writeln!(f, "{}", build_spacer(ENTRY_SEPARATOR_WIDTH))
    }
}

/// The `message` field becomes the heading, the other fields are kept in the order they
/// were recorded.
#[derive(Debug, Default)]
pub struct VisitEventAndCollectFields {
    pub heading: String,
    pub body: Vec<(String, String)>,
}

impl VisitEventAndCollectFields {
    fn insert(&mut self, field_name: &str, field_value: String) {
        if field_name == "message" {
            self.heading = field_value;
        } else {
            self.body.push((field_name.to_owned(), field_value));
        }
    }
}

impl Visit for VisitEventAndCollectFields {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field.name(), format!("{value:?}"));
    }

    /// [`std::fmt::Display`] for strings, so quotes and newlines are not escaped.
    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field.name(), value.to_owned());
    }
}

#[must_use]
pub fn build_spacer(width: usize) -> String {
    ENTRY_SEPARATOR_CHAR
        .repeat(width)
        .with(SEPARATOR_FG_COLOR)
        .to_string()
}

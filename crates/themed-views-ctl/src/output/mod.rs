//! Styled terminal output for `themed-views-ctl`.
//!
//! `anstream` strips styling when the stream is not a terminal, so piped
//! output stays plain.

mod styles;

use std::fmt::Display;
use std::io::Write;

pub(crate) use styles::clap_styles;

use styles::{ACTIVE, ERROR, HEADER, HINT, WARNING};

/// Error message on stderr.
pub(crate) fn error(msg: impl Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{ERROR}✗ {msg}{ERROR:#}").ok();
}

pub(crate) fn warning(msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{WARNING}! {msg}{WARNING:#}").ok();
}

pub(crate) fn header(msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{HEADER}{msg}{HEADER:#}").ok();
}

pub(crate) fn hint(msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{HINT}{msg}{HINT:#}").ok();
}

/// Bulleted list entry, highlighted when `active`.
pub(crate) fn item(msg: impl Display, active: bool) {
    let mut out = anstream::stdout().lock();
    if active {
        writeln!(out, "  {ACTIVE}• {msg} (active){ACTIVE:#}").ok();
    } else {
        writeln!(out, "  • {msg}").ok();
    }
}

/// Numbered list entry.
pub(crate) fn numbered(index: usize, msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "  {HINT}{index}.{HINT:#} {msg}").ok();
}

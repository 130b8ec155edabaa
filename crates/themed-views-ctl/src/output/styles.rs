//! Style constants and clap help styling.

use anstyle::{AnsiColor, Color, Effects, Style};

/// Red for errors.
pub(crate) const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Yellow for warnings.
pub(crate) const WARNING: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));

/// Bold section headers.
pub(crate) const HEADER: Style = Style::new().effects(Effects::BOLD);

/// Cyan marker for the active entry in a list.
pub(crate) const ACTIVE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));

/// Dimmed hints.
pub(crate) const HINT: Style = Style::new().effects(Effects::DIMMED);

pub(crate) fn clap_styles() -> clap::builder::Styles {
    let accent = Style::new()
        .fg_color(Some(Color::Ansi(AnsiColor::Green)))
        .effects(Effects::BOLD);
    clap::builder::Styles::styled()
        .header(accent)
        .usage(accent)
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
        .error(
            Style::new()
                .fg_color(Some(Color::Ansi(AnsiColor::Red)))
                .effects(Effects::BOLD),
        )
        .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
}

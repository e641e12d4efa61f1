//! User-facing console output.
//!
//! Progress lines go to stdout; `quiet` silences everything except errors.
//! The `✅`/`❌` markers and section headers are colored when stdout is a
//! terminal. Piped output carries no escape codes.

use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes progress, success and error lines to stdout.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    quiet: bool,
    color_choice: ColorChoice,
}

impl OutputManager {
    /// Creates an output manager; color is used only when stdout is a terminal.
    pub fn new(quiet: bool) -> Self {
        let color_choice = if io::stdout().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            quiet,
            color_choice,
        }
    }

    /// Creates an output manager that prints nothing.
    pub fn silent() -> Self {
        Self::new(true)
    }

    /// Prints a progress line.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        self.emit(|out| writeln!(out, "{message}"))
    }

    /// Prints a success line.
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.emit(|out| write_marked(out, "✅", Color::Green, message))
    }

    /// Prints a section header preceded by a blank line.
    pub fn section(&self, title: &str) -> io::Result<()> {
        self.emit(|out| write_heading(out, title))
    }

    /// Prints a line indented by two spaces.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.emit(|out| writeln!(out, "  {message}"))
    }

    /// Prints an error line. Not affected by quiet mode.
    pub fn error(&self, message: &str) -> io::Result<()> {
        let stdout = StandardStream::stdout(self.color_choice);
        let mut out = stdout.lock();
        write_marked(&mut out, "❌", Color::Red, message)?;
        out.flush()
    }

    fn emit<F>(&self, write: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn WriteColor) -> io::Result<()>,
    {
        if self.quiet {
            return Ok(());
        }
        let stdout = StandardStream::stdout(self.color_choice);
        let mut out = stdout.lock();
        write(&mut out)?;
        out.flush()
    }
}

fn write_marked(
    out: &mut dyn WriteColor,
    marker: &str,
    color: Color,
    message: &str,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{marker}")?;
    out.reset()?;
    writeln!(out, " {message}")
}

fn write_heading(out: &mut dyn WriteColor, title: &str) -> io::Result<()> {
    writeln!(out)?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(out, "{title}")?;
    out.reset()?;
    writeln!(out)
}

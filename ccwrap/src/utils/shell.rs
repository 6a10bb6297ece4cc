use crate::utils::{IResult, WriteColorExt};

use std::fmt;
use std::io::prelude::*;

use termcolor::Color::Green;
use termcolor::{self, Color, ColorSpec, StandardStream, WriteColor};


/// The requested verbosity of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Verbose,
    Quiet,
}


/// Diagnostic output of the wrapper.
///
/// Everything goes to stderr. The wrapper stands in for a compiler, so its
/// own output must stay out of the way: the default verbosity is `Quiet`,
/// where only errors are printed.
pub struct Shell {
    /// Wrapper around stderr. This helps with supporting sending
    /// output to a memory buffer which is useful for tests.
    output: ShellOut,
    /// How verbose messages should be.
    verbosity: Verbosity,
}


/// A `Write`able object, either with or without color support
enum ShellOut {
    /// A plain write object without color support
    Write(Box<dyn Write + Send>),
    /// Color-enabled stderr, colored when it is a terminal
    Stream(StandardStream),
}

impl Shell {
    /// Creates a new quiet shell writing to stderr with 'auto' color.
    pub fn new() -> Shell {
        let color = if atty::is(atty::Stream::Stderr) {
            termcolor::ColorChoice::Auto
        } else {
            termcolor::ColorChoice::Never
        };
        Shell {
            output: ShellOut::Stream(StandardStream::stderr(color)),
            verbosity: Verbosity::Quiet,
        }
    }

    /// Creates a shell from a plain writable object, with no color, and max verbosity.
    pub fn from_write<W: Write + Send + 'static>(out: W) -> Shell {
        Shell {
            output: ShellOut::Write(Box::new(out)),
            verbosity: Verbosity::Verbose,
        }
    }

    /// Prints a red 'error' message. Errors are printed at every verbosity.
    pub fn error<T: fmt::Display>(&mut self, message: T) -> IResult<()> {
        self.output.stderr_status("error", Some(&message))
    }

    /// Prints an amber 'warning' message.
    pub fn warn<T: fmt::Display>(&mut self, message: T) -> IResult<()> {
        self.stderr_status("warning", Some(&message))
    }

    /// Shortcut to right-align and color green a status message.
    pub fn status<T, U>(&mut self, status: T, message: U) -> IResult<()>
    where
        T: fmt::Display,
        U: fmt::Display,
    {
        self.print_justified(&status, Some(&message), Green)
    }

    /// Runs the callback only if we are in verbose mode.
    pub fn verbose<F>(&mut self, mut callback: F) -> IResult<()>
    where
        F: FnMut(&mut Shell) -> IResult<()>,
    {
        match self.verbosity {
            Verbosity::Verbose => callback(self),
            _ => Ok(()),
        }
    }

    /// Gets the verbosity of the shell.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Updates the verbosity of the shell.
    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    /// Prints a message unless quiet.
    fn stderr_status(
        &mut self,
        status: &str,
        msg: Option<&dyn fmt::Display>,
    ) -> IResult<()> {
        match self.verbosity {
            Verbosity::Quiet => Ok(()),
            _ => self.output.stderr_status(status, msg)
        }
    }

    /// Prints a justified status line unless quiet.
    fn print_justified(
        &mut self,
        status: &dyn fmt::Display,
        msg: Option<&dyn fmt::Display>,
        color: Color
    ) -> IResult<()> {
        match self.verbosity {
            Verbosity::Quiet => Ok(()),
            _ => self.output.stderr_status_justified(status, msg, color)
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellOut {
    /// Prints out a message with a status. The status comes first, and is bold plus the given color.
    fn stderr_status(&mut self, status: &str, msg: Option<&dyn fmt::Display>) -> IResult<()> {
        match *self {
            ShellOut::Stream(ref mut stderr) => {
                stderr.reset()?;
                stderr.write_status(status, stderr.supports_color())?;
                match msg {
                    Some(msg) => writeln!(stderr, " {}", msg)?,
                    None => write!(stderr, " ")?,
                }
            }
            ShellOut::Write(ref mut w) => {
                write!(w, "{}: ", status)?;
                if let Some(m) = msg {
                    writeln!(w, "{}", m)?;
                }
            }
        }
        Ok(())
    }

    /// Prints out a message with a status. The status is right aligned to 12 chars.
    fn stderr_status_justified(
        &mut self,
        status: &dyn fmt::Display,
        msg: Option<&dyn fmt::Display>,
        color: Color,
    ) -> IResult<()> {
        match *self {
            ShellOut::Stream(ref mut stderr) => {
                stderr.reset()?;
                stderr.set_color(ColorSpec::new().set_bold(true).set_fg(Some(color)))?;
                write!(stderr, "{:>12}", status)?;
                stderr.reset()?;
                match msg {
                    Some(msg) => writeln!(stderr, " {}", msg)?,
                    None => write!(stderr, " ")?,
                }
            }
            ShellOut::Write(ref mut w) => {
                write!(w, "{:>12}", status)?;
                match msg {
                    Some(msg) => writeln!(w, " {}", msg)?,
                    None => write!(w, " ")?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("verbosity", &self.verbosity)
            .finish()
    }
}

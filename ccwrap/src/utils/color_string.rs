use crate::utils::IResult;

pub use termcolor::Color;

use termcolor::{ColorSpec, WriteColor};


pub trait WriteColorExt: std::io::Write {
    fn set_spec(&mut self, spec: &ColorSpec) -> IResult<()>;

    fn reset_color(&mut self) -> IResult<()>;

    fn write_bold<B: AsRef<[u8]>>(&mut self, buf: B, color: Option<Color>) -> IResult<()> {
        self.set_spec(ColorSpec::new().set_fg(color).set_bold(true))?;
        self.write_all(buf.as_ref())?;
        self.reset_color()
    }

    // `error:`, `warning:` and `note:` prefixes, colored by their first letter
    fn write_status(&mut self, status: &str, colored: bool) -> IResult<()> {
        let color = match status.chars().next() {
            Some('w') => Color::Yellow,
            Some('e') => Color::Red,
            Some('n') => Color::Cyan,
            _ => Color::White,
        };
        if colored {
            self.write_bold(status, Some(color))?;
            self.write_bold(b":", None)?;
        } else {
            self.write_all(status.as_bytes())?;
            self.write_all(b":")?;
        }
        Ok(())
    }
}

impl<T> WriteColorExt for T where T: WriteColor {
    fn set_spec(&mut self, spec: &ColorSpec) -> IResult<()> {
        self.set_color(spec)?;
        Ok(())
    }
    fn reset_color(&mut self) -> IResult<()> {
        self.reset()?;
        Ok(())
    }
}

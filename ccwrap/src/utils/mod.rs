pub use anyhow::Error;
pub type IResult<T> = anyhow::Result<T>;

mod byte_find;
pub use byte_find::{ByteFind, Lines};

mod color_string;
pub use color_string::{Color, WriteColorExt};

mod command_ext;
pub use command_ext::CommandExt;

pub mod paths;

mod shell;
pub use shell::{Shell, Verbosity};


/// Reads an environment variable, treating an empty value the same as an unset one.
pub fn env_nonempty(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => Some(v),
        _ => None,
    }
}

/// Whether an environment flag like `CCWRAP_VERBOSE` is switched on.
pub fn env_flag(key: &str) -> bool {
    matches!(
        env_nonempty(key).as_deref(),
        Some("1") | Some("true") | Some("yes") | Some("on")
    )
}

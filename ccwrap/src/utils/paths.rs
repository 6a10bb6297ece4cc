use crate::utils::IResult;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Context;

/// Equivalent to [`std::fs::read`] with better error messages.
pub fn read_bytes(p: impl AsRef<Path>) -> IResult<Vec<u8>> {
    let path = p.as_ref();
    fs::read(path)
        .with_context(|| format!("failed to read file `{}`", path.display()))
}

/// Equivalent to [`std::fs::read_to_string`] with better error messages.
pub fn read_string(p: impl AsRef<Path>) -> IResult<String> {
    let path = p.as_ref();
    fs::read_to_string(path)
        .with_context(|| format!("failed to read file `{}`", path.display()))
}

/// Path of the running executable with its extension swapped for `ext`,
/// e.g. `/usr/bin/ccwrap` -> `/usr/bin/ccwrap.toml`.
pub fn current_exe_with_extension(ext: &str) -> IResult<PathBuf> {
    let exe = std::env::current_exe()
        .context("couldn't get the path of the current executable")?;
    Ok(exe.with_extension(ext))
}

/// Raw bytes of an OS string. On windows only unicode strings have them.
pub fn os2bytes(s: &OsStr) -> Option<&[u8]> {
    #[cfg(unix)]
    {
        use std::os::unix::prelude::*;
        Some(s.as_bytes())
    }
    #[cfg(windows)]
    {
        s.to_str().map(str::as_bytes)
    }
}

/// Converts bytes taken from [`os2bytes`] back to a path.
pub fn bytes2path(bytes: &[u8]) -> IResult<PathBuf> {
    #[cfg(unix)]
    {
        use std::os::unix::prelude::*;
        Ok(PathBuf::from(OsStr::from_bytes(bytes)))
    }
    #[cfg(windows)]
    {
        use std::str;
        match str::from_utf8(bytes) {
            Ok(s) => Ok(PathBuf::from(s)),
            Err(..) => Err(anyhow::format_err!("invalid non-unicode path")),
        }
    }
}

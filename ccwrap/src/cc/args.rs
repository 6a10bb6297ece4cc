//! Recognized compiler-driver tokens and the predicates the dispatcher scans with.
//!
//! Arguments are `OsString`s: anything the real compiler accepts has to pass
//! through untouched, so tokens are matched on their bytes and nothing here
//! requires valid unicode.

use super::Error;
use crate::utils::{paths, ByteFind};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Leading arguments of the "print system include paths" probe.
pub const PROBE: [&str; 4] = ["-E", "-xc++", "-", "-v"];

pub const STATIC_LIBSTDCXX: &str = "-static-libstdc++";
pub const STDLIB_LIBCXX: &str = "-stdlib=libc++";
pub const LINK_LIBSTDCXX: &str = "-lstdc++";
pub const LINK_LIBCXX: &str = "-lc++";
pub const CXX_STD: &str = "-std=c++";
pub const LINKER_PARAMS: &str = "-Wl,@";


/// Whether the invocation starts with the include-path probe.
pub fn is_probe(args: &[OsString]) -> bool {
    args.len() >= PROBE.len()
        && args.iter().zip(PROBE.iter()).all(|(a, p)| a == p)
}

/// Whether `token` appears as a whole argument.
pub fn contains(args: &[OsString], token: &str) -> bool {
    args.iter().any(|a| a == token)
}

/// Whether any argument selects a C++ standard (`-std=c++17`, `-std=c++2a`, ...).
pub fn mentions_cxx_std(args: &[OsString]) -> bool {
    args.iter().any(|a| match paths::os2bytes(a) {
        Some(bytes) => bytes.find(CXX_STD.as_bytes()).is_some(),
        None => false,
    })
}

/// Path of the linker response file referenced by `-Wl,@<path>`.
pub fn response_file(arg: &OsStr) -> Option<PathBuf> {
    let rest = paths::os2bytes(arg)?.strip_prefix(LINKER_PARAMS.as_bytes())?;
    paths::bytes2path(rest).ok()
}

/// `-Wl,@<path>`
pub fn response_file_arg(path: &Path) -> OsString {
    let mut arg = OsString::from(LINKER_PARAMS);
    arg.push(path);
    arg
}

/// Splits a flag string with POSIX shell quoting rules.
pub fn split_flags(flags: &str) -> Result<Vec<OsString>, Error> {
    match shlex::split(flags) {
        Some(split) => Ok(split.into_iter().map(OsString::from).collect()),
        None => Err(Error::invalid_arg(format!(
            "failed to split flags `{}`: unbalanced quotes or trailing escape",
            flags
        ))),
    }
}

//! Rewriting of linker response files (`-Wl,@<path>`).
//!
//! Bazel hands the link line to the compiler through a params file with one
//! flag per line. The `-lstdc++` entries in it have to follow the same rules
//! as the ones on the command line, so the file is copied with those lines
//! dropped or swapped for `-lc++`.

use super::args::{LINK_LIBCXX, LINK_LIBSTDCXX};
use crate::utils::{paths, IResult, Lines};
use anyhow::Context;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Suffix of rewritten response files.
pub const SUFFIX: &str = ".linker-params";


/// Copies `input` to `out` line by line, terminators included.
///
/// Only a line that is exactly `-lstdc++\n` is touched: it is dropped, or
/// replaced by `-lc++\n` when linking against libc++.
pub fn sanitize<W: Write>(input: &[u8], libcxx: bool, out: &mut W) -> io::Result<()> {
    for line in Lines::new(input) {
        if !is_libstdcxx_line(line) {
            out.write_all(line)?;
        } else if libcxx {
            out.write_all(LINK_LIBCXX.as_bytes())?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn is_libstdcxx_line(line: &[u8]) -> bool {
    line.strip_suffix(b"\n") == Some(LINK_LIBSTDCXX.as_bytes())
}


/// Writes a sanitized copy of the response file at `src` into `dir` and
/// returns the new file's path, `dir` joined with the file name.
///
/// The copy is always created in `dir` (the sandbox working directory,
/// which the build system removes after the compiler exits), never next to
/// `src`. It is left on disk for the compiler to read; only the handle is
/// closed here. If writing fails, the partial copy is removed.
pub fn rewrite(src: &Path, dir: &Path, libcxx: bool) -> IResult<PathBuf> {
    let contents = paths::read_bytes(src)?;

    let mut tmp = tempfile::Builder::new()
        .prefix("tmp")
        .suffix(SUFFIX)
        .tempfile_in(dir)
        .with_context(|| format!(
            "failed to create response file in `{}`", dir.display()
        ))?;

    let tmp_path = tmp.path().to_path_buf();
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        sanitize(&contents, libcxx, &mut out)
            .and_then(|_| out.flush())
            .with_context(|| format!(
                "failed to write response file `{}`", tmp_path.display()
            ))?;
    }

    let (file, path) = tmp.keep()
        .context("failed to keep rewritten response file")?;
    drop(file);

    // tempfile hands back an absolute path; keep the caller's spelling of
    // `dir` so `.` yields `./tmpXXXXXX.linker-params`
    match path.file_name() {
        Some(name) => Ok(dir.join(name)),
        None => Ok(path),
    }
}

//! Fake compiler for the integration tests.
//!
//! Records the name it was invoked as and its arguments, one per line, to the
//! first free `$CC_SHIM_OUT_DIR/out{N}`. The contents of every `-Wl,@<path>`
//! response file are copied to `out{N}.params`. Exits with
//! `$CC_SHIM_EXIT_CODE` if set.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = env::args_os().map(|a| a.to_string_lossy().into_owned());
    let program = args.next().unwrap_or_default();
    let args: Vec<String> = args.collect();

    let out_dir = match env::var_os("CC_SHIM_OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            eprintln!("{}: CC_SHIM_OUT_DIR not set", program);
            return ExitCode::FAILURE;
        }
    };

    let out = match (0..).map(|i| out_dir.join(format!("out{i}"))).find(|p| !p.exists()) {
        Some(out) => out,
        None => return ExitCode::FAILURE,
    };

    let name = Path::new(&program)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut record = format!("{name}\n");
    let mut params = Vec::new();
    for arg in args.iter() {
        record.push_str(arg);
        record.push('\n');
        if let Some(path) = arg.strip_prefix("-Wl,@") {
            match fs::read(path) {
                Ok(bytes) => params.extend(bytes),
                Err(e) => {
                    eprintln!("{}: can't read `{}`: {}", program, path, e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    let written = fs::write(&out, record)
        .and_then(|_| fs::write(out.with_extension("params"), params));
    if let Err(e) = written {
        eprintln!("{}: can't write `{}`: {}", program, out.display(), e);
        return ExitCode::FAILURE;
    }

    match env::var("CC_SHIM_EXIT_CODE").ok().and_then(|c| c.parse::<u8>().ok()) {
        Some(code) => ExitCode::from(code),
        None => ExitCode::SUCCESS,
    }
}

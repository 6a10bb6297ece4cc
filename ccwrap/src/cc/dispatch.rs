use super::args::{self, LINK_LIBCXX, LINK_LIBSTDCXX, STATIC_LIBSTDCXX, STDLIB_LIBCXX};
use super::{flagfile, Error, ToolFamily};
use crate::core::Config;
use crate::utils::{CommandExt, IResult};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;


// Why a compiler was picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    // `-E -xc++ - -v` include path detection
    Probe,
    // Everything else
    Compile,
}


/// A planned run of the real compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<OsString>,
    reason: Reason,
}

impl Invocation {
    pub fn new(program: PathBuf, args: Vec<OsString>, reason: Reason) -> Self {
        Self { program, args, reason }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments after argument 0.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Replaces the current process with the compiler.
    ///
    /// Only returns on failure, or with the compiler's exit code on
    /// platforms that have to run it as a child instead.
    pub fn exec(&self) -> Result<i32, Error> {
        match self.command().exec_replace() {
            Ok(code) => Ok(code),

            Err(ref e) if e.kind() == std::io::ErrorKind::NotFound =>
                Err(Error::tool_not_found(format!(
                    "failed to find tool. Is `{}` installed?",
                    self.program.display()
                ))),

            Err(ref e) =>
                Err(Error::tool_exec(format!(
                    "command `{}` failed to start: {}",
                    self.program.display(), e
                ))),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in self.args.iter() {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}


/// Decides which real compiler to run for one wrapper invocation, and with
/// which arguments.
#[derive(Debug)]
pub struct Dispatcher<'a> {
    config: &'a Config,
    // argv without the program name
    args: Vec<OsString>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(config: &'a Config, args: Vec<OsString>) -> Self {
        Self { config, args }
    }

    /// Works out the invocation. May write rewritten response files into the
    /// config's working directory.
    pub fn plan(&self) -> IResult<Invocation> {
        let compiler = self.config.compiler();

        // The probe has to see the same -stdlib= as real compilations,
        // otherwise the detected include paths are for the wrong library.
        if args::is_probe(&self.args) {
            let mut argv = self.args.clone();
            argv.extend(compiler.cxxflags_args()?);
            return Ok(Invocation::new(compiler.real_cxx.clone(), argv, Reason::Probe));
        }

        let program = self.select_compiler().to_path_buf();
        let mut argv = if self.needs_rewrite() {
            self.rewrite_args()?
        } else {
            self.args.clone()
        };

        let family = ToolFamily::detect(&program);
        argv.extend(family.extra_flags().iter().map(OsString::from));

        Ok(Invocation::new(program, argv, Reason::Compile))
    }

    // `gcc` silently ignores -static-libstdc++, so anything mentioning the
    // C++ standard library goes through the C++ driver.
    fn select_compiler(&self) -> &'a Path {
        let compiler = self.config.compiler();
        if args::contains(&self.args, STATIC_LIBSTDCXX)
            || args::contains(&self.args, STDLIB_LIBCXX)
        {
            compiler.real_cxx.as_path()
        } else {
            compiler.real_cc.as_path()
        }
    }

    fn needs_rewrite(&self) -> bool {
        args::contains(&self.args, STATIC_LIBSTDCXX) || self.config.compiler().wants_libcxx()
    }

    // Drops or swaps -lstdc++ (on the command line and in response files)
    // and forwards cxxflags to targets that pick their own -std=c++.
    fn rewrite_args(&self) -> IResult<Vec<OsString>> {
        let compiler = self.config.compiler();
        let libcxx = compiler.wants_libcxx();

        let mut argv = if !compiler.cxxflags.is_empty() && args::mentions_cxx_std(&self.args) {
            compiler.cxxflags_args()?
        } else {
            Vec::new()
        };

        for arg in self.args.iter() {
            if arg == LINK_LIBSTDCXX {
                if libcxx {
                    argv.push(OsString::from(LINK_LIBCXX));
                }
            } else if let Some(path) = args::response_file(arg) {
                let rewritten = flagfile::rewrite(&path, self.config.work_dir(), libcxx)?;
                self.config.shell().verbose(|s| {
                    s.status("Rewrote", format!(
                        "`{}` -> `{}`", path.display(), rewritten.display()
                    ))
                })?;
                argv.push(args::response_file_arg(&rewritten));
            } else {
                argv.push(arg.clone());
            }
        }
        Ok(argv)
    }
}

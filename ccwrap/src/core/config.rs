use crate::cc::{self, which, Error};
use crate::cc::args::STDLIB_LIBCXX;
use crate::toml::{read_config, TomlConfig};
use crate::utils::{env_flag, env_nonempty, paths, IResult, Shell, Verbosity};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};


/// The real compilers the wrapper forwards to, and the extra C++ flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Path of the real C compiler
    pub real_cc: PathBuf,
    /// Path of the real C++ compiler
    pub real_cxx: PathBuf,
    /// Space separated flags for C++ compilations (shell quoting applies)
    pub cxxflags: String,
}

impl CompilerConfig {
    pub fn new(
        real_cc: impl Into<PathBuf>,
        real_cxx: impl Into<PathBuf>,
        cxxflags: impl Into<String>,
    ) -> Self {
        Self {
            real_cc: real_cc.into(),
            real_cxx: real_cxx.into(),
            cxxflags: cxxflags.into(),
        }
    }

    /// Whether C++ code is built against libc++ instead of libstdc++.
    pub fn wants_libcxx(&self) -> bool {
        self.cxxflags.contains(STDLIB_LIBCXX)
    }

    /// `cxxflags` split into separate arguments.
    pub fn cxxflags_args(&self) -> Result<Vec<OsString>, Error> {
        cc::args::split_flags(&self.cxxflags)
    }
}


/// One source of configuration values. Unset fields fall through to the
/// next source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLayer {
    pub real_cc: Option<String>,
    pub real_cxx: Option<String>,
    pub cxxflags: Option<String>,
    pub verbose: Option<bool>,
}

impl ConfigLayer {
    /// `CCWRAP_REAL_CC`, `CCWRAP_REAL_CXX`, `CCWRAP_CXXFLAGS` and `CCWRAP_VERBOSE`
    /// from the environment of the running process.
    pub fn from_env() -> Self {
        Self {
            real_cc: env_nonempty("CCWRAP_REAL_CC"),
            real_cxx: env_nonempty("CCWRAP_REAL_CXX"),
            cxxflags: std::env::var("CCWRAP_CXXFLAGS").ok(),
            verbose: env_nonempty("CCWRAP_VERBOSE").map(|_| env_flag("CCWRAP_VERBOSE")),
        }
    }

    /// The same variables, captured when this crate was compiled.
    pub fn builtin() -> Self {
        fn nonempty(v: Option<&str>) -> Option<String> {
            v.filter(|v| !v.is_empty()).map(str::to_string)
        }
        Self {
            real_cc: nonempty(option_env!("CCWRAP_REAL_CC")),
            real_cxx: nonempty(option_env!("CCWRAP_REAL_CXX")),
            cxxflags: option_env!("CCWRAP_CXXFLAGS").map(str::to_string),
            verbose: None,
        }
    }

    /// Fills the fields unset in `self` from `lower`.
    pub fn or(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            real_cc: self.real_cc.or(lower.real_cc),
            real_cxx: self.real_cxx.or(lower.real_cxx),
            cxxflags: self.cxxflags.or(lower.cxxflags),
            verbose: self.verbose.or(lower.verbose),
        }
    }
}

impl From<TomlConfig> for ConfigLayer {
    fn from(toml: TomlConfig) -> Self {
        Self {
            real_cc: toml.real_cc.filter(|v| !v.is_empty()),
            real_cxx: toml.real_cxx.filter(|v| !v.is_empty()),
            cxxflags: toml.cxxflags,
            verbose: toml.verbose,
        }
    }
}


/// Configuration of one wrapper run.
#[derive(Debug)]
pub struct Config {
    /// Compilers and flags to forward to
    compiler: CompilerConfig,
    /// Directory in which rewritten response files are created
    work_dir: PathBuf,
    /// Information about how to write messages to the shell
    shell: Mutex<Shell>,
}

impl Config {
    /// Creates a new config instance from explicit values.
    ///
    /// This is typically used for tests or other special cases. `default` is
    /// preferred otherwise.
    pub fn new(shell: Shell, work_dir: PathBuf, compiler: CompilerConfig) -> Config {
        Config {
            compiler,
            work_dir,
            shell: Mutex::new(shell),
        }
    }

    /// Creates the config for this process, resolving each value from (in order)
    /// the environment, the sidecar file, the values built into the binary and
    /// finally `cc`/`c++` on `PATH`.
    ///
    /// The sidecar file is `CCWRAP_CONFIG` if set, otherwise the executable's
    /// own path with a `.toml` extension if that exists.
    pub fn default() -> IResult<Config> {
        let sidecar = match env_nonempty("CCWRAP_CONFIG") {
            Some(path) => Some(PathBuf::from(path)),
            None => paths::current_exe_with_extension("toml")
                .ok()
                .filter(|p| p.is_file()),
        };
        Self::resolve(
            Shell::new(),
            PathBuf::from("."),
            ConfigLayer::from_env(),
            sidecar.as_deref(),
            ConfigLayer::builtin(),
        )
    }

    /// Merges the configuration sources; `env` wins over the sidecar file,
    /// which wins over `builtin`.
    pub fn resolve(
        mut shell: Shell,
        work_dir: PathBuf,
        env: ConfigLayer,
        sidecar: Option<&Path>,
        builtin: ConfigLayer,
    ) -> IResult<Config> {
        let (file, warnings) = match sidecar {
            Some(path) => {
                let (toml, warnings) = read_config(path)?;
                (ConfigLayer::from(toml), warnings)
            }
            None => (ConfigLayer::default(), Vec::new()),
        };
        let layer = env.or(file).or(builtin);

        if layer.verbose.unwrap_or(false) {
            shell.set_verbosity(Verbosity::Verbose);
        }
        for warning in warnings.iter() {
            shell.warn(warning)?;
        }

        // Never fall back to ourselves, that would exec in a loop.
        let this = std::env::current_exe().ok();
        let real_cc = layer.real_cc
            .map(PathBuf::from)
            .or_else(|| which("cc", this.as_deref()))
            .ok_or_else(|| Error::config(
                "no C compiler configured: set `CCWRAP_REAL_CC` or `real-cc`, or put a `cc` other than ccwrap on PATH"
            ))?;
        let real_cxx = layer.real_cxx
            .map(PathBuf::from)
            .or_else(|| which("c++", this.as_deref()))
            .ok_or_else(|| Error::config(
                "no C++ compiler configured: set `CCWRAP_REAL_CXX` or `real-cxx`, or put a `c++` other than ccwrap on PATH"
            ))?;
        let compiler = CompilerConfig::new(real_cc, real_cxx, layer.cxxflags.unwrap_or_default());

        shell.verbose(|s| {
            s.status("Using", format!(
                "cc=`{}` cxx=`{}` cxxflags=`{}`",
                compiler.real_cc.display(),
                compiler.real_cxx.display(),
                compiler.cxxflags,
            ))
        })?;

        Ok(Config::new(shell, work_dir, compiler))
    }

    /// The compilers and flags to forward to.
    pub fn compiler(&self) -> &CompilerConfig {
        &self.compiler
    }

    /// Directory for rewritten response files.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Gets a reference to the shell, e.g., for writing error messages.
    pub fn shell(&self) -> MutexGuard<'_, Shell> {
        // A poisoned shell is still usable for printing.
        self.shell.lock().unwrap_or_else(|e| e.into_inner())
    }
}

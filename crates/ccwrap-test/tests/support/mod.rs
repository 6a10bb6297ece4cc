#![allow(dead_code)]

use ccwrap::cc::{Dispatcher, Invocation};
use ccwrap::core::{CompilerConfig, Config};
use ccwrap::utils::Shell;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{Builder, TempDir};


// The recording compiler built from `src/bin/cc-shim.rs`
pub fn shim_exe() -> &'static Path {
    Path::new(env!("CARGO_BIN_EXE_cc-shim"))
}

// The wrapper binary built from `src/bin/ccwrap-runner.rs`
pub fn wrapper_exe() -> &'static Path {
    Path::new(env!("CARGO_BIN_EXE_ccwrap-runner"))
}

const WRAPPER_VARS: [&str; 5] = [
    "CCWRAP_REAL_CC",
    "CCWRAP_REAL_CXX",
    "CCWRAP_CXXFLAGS",
    "CCWRAP_CONFIG",
    "CCWRAP_VERBOSE",
];


#[derive(Debug)]
pub struct Test {
    pub td: TempDir,
    cc: PathBuf,
    cxx: PathBuf,
    cxxflags: String,
}

#[derive(Debug)]
pub struct Execution {
    program: String,
    args: Vec<String>,
    params: String,
}

impl Test {
    /// Shims named `cc` and `c++` (no flags are added for either).
    pub fn new() -> Test {
        Test::with_compilers("cc", "c++")
    }

    pub fn gnu() -> Test {
        Test::with_compilers("gcc", "g++")
    }

    pub fn clang() -> Test {
        Test::with_compilers("clang", "clang++")
    }

    fn with_compilers(cc: &str, cxx: &str) -> Test {
        let td = Builder::new().prefix("ccwrap-test").tempdir().unwrap();
        fs::create_dir(td.path().join("bin")).unwrap();
        fs::create_dir(td.path().join("out")).unwrap();
        let mut t = Test {
            td,
            cc: PathBuf::new(),
            cxx: PathBuf::new(),
            cxxflags: String::new(),
        };
        t.cc = t.shim(cc);
        t.cxx = t.shim(cxx);
        t
    }

    pub fn cxxflags(&mut self, flags: &str) -> &mut Test {
        self.cxxflags = flags.to_string();
        self
    }

    pub fn shim(&self, name: &str) -> PathBuf {
        let name = format!("{}{}", name, std::env::consts::EXE_SUFFIX);
        let dst = self.td.path().join("bin").join(name);
        link_or_copy(shim_exe(), &dst).unwrap();
        dst
    }

    pub fn cc_path(&self) -> &Path {
        &self.cc
    }

    pub fn cxx_path(&self) -> &Path {
        &self.cxx
    }

    /// Working directory of the wrapper, where rewritten response files go.
    pub fn work_dir(&self) -> PathBuf {
        self.td.path().join("work")
    }

    pub fn config(&self) -> Config {
        fs::create_dir_all(self.work_dir()).unwrap();
        Config::new(
            Shell::from_write(io::sink()),
            self.work_dir(),
            CompilerConfig::new(&self.cc, &self.cxx, self.cxxflags.clone()),
        )
    }

    /// Writes a file into the test directory and returns its path.
    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.td.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn plan(&self, args: &[&str]) -> Invocation {
        let config = self.config();
        let args = args.iter().map(OsString::from).collect();
        Dispatcher::new(&config, args).plan().unwrap()
    }

    /// Links the wrapper binary into `dir` (relative to the test directory)
    /// under `name` and returns its path.
    pub fn install_wrapper(&self, dir: &str, name: &str) -> PathBuf {
        let dir = self.td.path().join(dir);
        fs::create_dir_all(&dir).unwrap();
        let dst = dir.join(format!("{}{}", name, std::env::consts::EXE_SUFFIX));
        link_or_copy(wrapper_exe(), &dst).unwrap();
        dst
    }

    /// A command running the wrapper at `exe` from the working directory,
    /// with none of the `CCWRAP_*` variables of the outer environment.
    pub fn wrapper_at(&self, exe: &Path) -> Command {
        fs::create_dir_all(self.work_dir()).unwrap();
        let mut cmd = Command::new(exe);
        for var in WRAPPER_VARS {
            cmd.env_remove(var);
        }
        cmd.env("CC_SHIM_OUT_DIR", self.td.path().join("out"))
            .current_dir(self.work_dir());
        cmd
    }

    /// The wrapper, pointed at this test's shims through the environment.
    pub fn wrapper(&self) -> Command {
        let mut cmd = self.wrapper_at(wrapper_exe());
        cmd.env("CCWRAP_REAL_CC", &self.cc)
            .env("CCWRAP_REAL_CXX", &self.cxx)
            .env("CCWRAP_CXXFLAGS", &self.cxxflags);
        cmd
    }

    /// Plans the invocation and runs it as a child process.
    pub fn run(&self, args: &[&str]) -> Invocation {
        let invocation = self.plan(args);
        let status = invocation
            .command()
            .env("CC_SHIM_OUT_DIR", self.td.path().join("out"))
            .status()
            .unwrap();
        assert!(status.success(), "{} failed: {}", invocation, status);
        invocation
    }

    /// Number of compiler runs recorded so far.
    pub fn runs(&self) -> usize {
        fs::read_dir(self.td.path().join("out"))
            .unwrap()
            .filter(|e| e.as_ref().unwrap().path().extension().is_none())
            .count()
    }

    pub fn cmd(&self, i: u32) -> Execution {
        let out = self.td.path().join("out");
        let s = fs::read_to_string(out.join(format!("out{}", i))).unwrap();
        let params = fs::read_to_string(out.join(format!("out{}.params", i))).unwrap();
        let mut lines = s.lines().map(|s| s.to_string());
        Execution {
            program: lines.next().unwrap(),
            args: lines.collect(),
            params,
        }
    }
}

impl Execution {
    pub fn must_be(&self, program: &str) -> &Execution {
        let expected = format!("{}{}", program, std::env::consts::EXE_SUFFIX);
        assert_eq!(expected, self.program, "wrong compiler ran: {:?}", self.args);
        self
    }

    pub fn must_have(&self, p: &str) -> &Execution {
        if !self.has(p) {
            panic!("didn't find {:?} in {:?}", p, self.args);
        } else {
            self
        }
    }

    pub fn must_not_have(&self, p: &str) -> &Execution {
        if self.has(p) {
            panic!("found {:?} in {:?}", p, self.args);
        } else {
            self
        }
    }

    pub fn must_have_once(&self, p: &str) -> &Execution {
        let n = self.args.iter().filter(|a| *a == p).count();
        assert_eq!(1, n, "expected {:?} once in {:?}", p, self.args);
        self
    }

    pub fn print(&self) -> &Execution {
        println!("{} {:?}", self.program, self.args);
        self
    }

    pub fn has(&self, p: &str) -> bool {
        self.args.iter().any(|arg| arg == p)
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Concatenated contents of the response files the compiler was given.
    pub fn params(&self) -> &str {
        &self.params
    }
}

/// Hard link an executable or copy it if that fails.
#[cfg(not(target_os = "macos"))]
fn link_or_copy<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> io::Result<()> {
    let from = from.as_ref();
    let to = to.as_ref();
    fs::hard_link(from, to).or_else(|_| fs::copy(from, to).map(|_| ()))
}

/// Copy an executable.
///
/// On macOS, hard linking the executable leads to strange failures, so we just copy.
#[cfg(target_os = "macos")]
fn link_or_copy<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> io::Result<()> {
    fs::copy(from, to).map(|_| ())
}

//! A drop-in `cc`/`c++` replacement for build systems.
//!
//! Picks the real C or C++ compiler for each invocation, makes libstdc++
//! link flags (including those in linker response files) agree with the
//! configured standard library, adds toolchain specific warning flags and
//! then execs the real compiler.

pub mod cc;
pub mod cli;
pub mod core;
pub mod toml;
pub mod utils;

//! Process entry point of the `ccwrap` binary.

use crate::cc::Dispatcher;
use crate::core::Config;
use crate::utils::{IResult, Shell};
use std::ffi::OsString;


/// Runs the wrapper on this process's arguments and exits with the real
/// compiler's status. Wrapper errors are printed and exit with status 1.
pub fn main() -> ! {
    let code = match run(std::env::args_os().skip(1).collect()) {
        Ok(code) => code,
        Err(e) => {
            drop(Shell::new().error(format!("{:#}", e)));
            1
        }
    };
    std::process::exit(code);
}

// `args` is argv without the program name
fn run(args: Vec<OsString>) -> IResult<i32> {
    let config = Config::default()?;

    let invocation = Dispatcher::new(&config, args).plan()?;
    config.shell().verbose(|s| s.status("Exec", &invocation))?;

    Ok(invocation.exec()?)
}

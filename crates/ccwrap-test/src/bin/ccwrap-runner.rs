//! The `ccwrap` binary, built inside this package so the integration tests
//! can run it (and install copies of it) next to `cc-shim`.

fn main() {
    ccwrap::cli::main()
}

fn main() {
    ccwrap::cli::main()
}

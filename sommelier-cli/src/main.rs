//! Entry point for the `sommelier` command-line interface.
#![forbid(unsafe_code)]

#[expect(clippy::print_stderr, reason = "errors are reported on stderr")]
fn main() {
    sommelier_cli::init_logging();
    if let Err(err) = sommelier_cli::run() {
        eprintln!("sommelier: {err}");
        std::process::exit(1);
    }
}

// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, dispatch, report the result.
// - Any command failure prints a single `Error:` line and exits non-zero.

fn main() {
    if let Err(err) = sanpush::cli::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

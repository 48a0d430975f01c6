//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = agridash_cli::run() {
        eprintln!("agridash: {err}");
        std::process::exit(1);
    }
}

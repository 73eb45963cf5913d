//! edgedock command-line entry point.

fn main() {
    edgedock_lib::init_tracing();

    if let Err(err) = edgedock_lib::cli::run() {
        eprintln!("edgedock: {err}");
        std::process::exit(1);
    }
}

fn main() {
    if let Err(err) = countdown::cli::run() {
        eprintln!("Error: {:#}", err);
        #[allow(clippy::exit)]
        std::process::exit(1);
    }
}

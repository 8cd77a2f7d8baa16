use env_logger::Env;

/// Initializes the process wide logger
///
/// Log level is taken from the RUST_LOG environment variable and
/// defaults to info
pub fn setup_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}

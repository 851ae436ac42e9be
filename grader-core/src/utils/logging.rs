use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Creates a logger which writes messages to standard output.
pub fn create_stdout_logger() -> InfoLogger {
    Arc::new(|msg: &str| println!("{msg}"))
}

/// Creates a logger which writes messages to standard error, e.g. when standard output carries
/// a machine readable result.
pub fn create_stderr_logger() -> InfoLogger {
    Arc::new(|msg: &str| eprintln!("{msg}"))
}

/// Creates a logger which discards all messages.
pub fn create_silent_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}

//! This module provides observability and diagnostics capabilities for the
//! pipeline engine and the bridge adapter.
//!
//! A system that delegates between two processors needs visibility into its
//! sequencing decisions. This module provides structured logging hooks to make
//! that behavior transparent and debuggable. The `log_event!` macro is the
//! primary tool; it routes through the `log` facade so hosts keep full control
//! over filtering and output.

/// Logs a structured key-value event string at `debug` level.
///
/// # Example
/// ```
/// use textloom::log_event;
/// let step = 2;
/// log_event!("event" = "run_step", "index" = &step);
/// ```
#[macro_export]
macro_rules! log_event {
    ($($key:literal = $value:expr),+ $(,)?) => {
        if log::log_enabled!(log::Level::Debug) {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            log::debug!("TEXTLOOM_EVENT: {{ {} }}", parts.join(", "));
        }
    };
}

/// Installs an `env_logger` backend at `debug` level for the textloom targets.
///
/// Intended for diagnostics sessions; ignores the error if a logger is
/// already installed.
pub fn enable_verbose_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

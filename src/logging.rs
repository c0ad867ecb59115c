use std::fs::File;

/// Initialize the `log`/`env_logger` backend.
///
/// The TUI owns the terminal while running, so when `PW_LOG_FILE` is set the
/// output is redirected there instead of stderr. Filtering stays under
/// `RUST_LOG` as usual.
pub fn init() {
    let mut builder = env_logger::Builder::from_default_env();
    if let Ok(path) = std::env::var("PW_LOG_FILE")
        && let Ok(file) = File::create(&path)
    {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    let _ = builder.try_init();
}

// Debug-build-only logging macros; compiled out of release builds.

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

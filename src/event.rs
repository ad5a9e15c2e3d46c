//! Log callback system.
//!
//! The library never writes to stderr or owns a logger. A host that wants
//! diagnostics registers a callback and routes messages into its own sink.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Lock the registry, recovering it if a callback panicked while held.
fn lock_log_callback() -> MutexGuard<'static, Option<LogCallback>> {
    log_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Set the global log callback, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    *lock_log_callback() = Some(Box::new(callback));
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    *lock_log_callback() = None;
}

/// Emit a log message to the registered callback, if any.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Some(callback) = lock_log_callback().as_ref() {
        callback(level, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_callback() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let called = Arc::new(AtomicBool::new(false));
        let called_clone = Arc::clone(&called);
        set_log_callback(move |level, msg| {
            if msg == "hello" {
                assert_eq!(level, LogLevel::Info);
                called_clone.store(true, Ordering::SeqCst);
            }
        });
        emit_log(LogLevel::Info, "hello");
        assert!(called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_emit_without_callback_is_noop() {
        emit_log(LogLevel::Debug, "nobody listening");
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Warn);
        assert!(LogLevel::Error > LogLevel::Info);
    }
}

//! Host notification hooks.
//!
//! The core never talks to a UI directly. A host registers callbacks here and
//! receives corruption notices and log lines, in addition to whatever a
//! `tracing` subscriber records.

use std::fmt;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard};

/// Severity passed to the host log callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Event name emitted when a node's stored content fails to load.
pub const NODE_CORRUPT: &str = "node_corrupt";

type EventHook = Box<dyn Fn(&str, &str) + Send + Sync>;
type LogHook = Box<dyn Fn(LogLevel, &str) + Send + Sync>;

#[derive(Default)]
struct Hooks {
    event: Option<EventHook>,
    log: Option<LogHook>,
}

fn hooks() -> &'static RwLock<Hooks> {
    static HOOKS: OnceLock<RwLock<Hooks>> = OnceLock::new();
    HOOKS.get_or_init(RwLock::default)
}

// A panicking host callback must not disable notification for good, so
// both paths recover a poisoned lock.
fn read_hooks() -> RwLockReadGuard<'static, Hooks> {
    hooks().read().unwrap_or_else(PoisonError::into_inner)
}

fn with_hooks_mut(f: impl FnOnce(&mut Hooks)) {
    let mut guard = hooks().write().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard);
}

/// Register the host event callback, replacing any previous one.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    with_hooks_mut(|hooks| hooks.event = Some(Box::new(callback)));
}

pub fn clear_event_callback() {
    with_hooks_mut(|hooks| hooks.event = None);
}

/// Register the host log callback, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    with_hooks_mut(|hooks| hooks.log = Some(Box::new(callback)));
}

pub fn clear_log_callback() {
    with_hooks_mut(|hooks| hooks.log = None);
}

/// Deliver `name`/`data` to the event callback, if one is registered.
pub fn emit_event(name: &str, data: &str) {
    if let Some(hook) = &read_hooks().event {
        hook(name, data);
    }
}

/// Deliver a log line to the log callback, if one is registered.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Some(hook) = &read_hooks().log {
        hook(level, message);
    }
}

/// Report a node whose content could not be loaded.
///
/// Logs through `tracing`, then notifies the host through both callbacks.
pub fn report_corrupt_node(node: impl fmt::Display, reason: &str) {
    tracing::warn!(%node, reason, "node content is corrupt, loading it empty");
    let data = format!("{node}: {reason}");
    emit_log(LogLevel::Warn, &format!("corrupt node {data}"));
    emit_event(NODE_CORRUPT, &data);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Other unit tests may report corrupt nodes concurrently, so the hooks
    // here only count the messages this test sends.
    #[test]
    fn test_hooks_receive_and_clear() {
        // A host hook that panicked while the registry was held leaves it
        // poisoned; delivery must keep working.
        let _ = std::thread::spawn(|| with_hooks_mut(|_| panic!("host hook panicked"))).join();
        assert!(hooks().is_poisoned());

        let events = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&events);
        set_event_callback(move |name, data| {
            if name == "probe" && data == "42" {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });
        emit_event("probe", "42");
        clear_event_callback();
        emit_event("probe", "42");
        assert_eq!(events.load(Ordering::SeqCst), 1);

        let logs = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&logs);
        set_log_callback(move |level, message| {
            if message == "probe" && level >= LogLevel::Info {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });
        emit_log(LogLevel::Info, "probe");
        emit_log(LogLevel::Debug, "probe");
        clear_log_callback();
        emit_log(LogLevel::Error, "probe");
        assert_eq!(logs.load(Ordering::SeqCst), 1);
    }
}

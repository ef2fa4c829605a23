use crate::domain::ports::LoadingIndicator;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Busy state shared with a UI that draws its own spinner.
///
/// Counts outstanding calls, so overlapping requests keep the indicator up until the
/// last one finishes.
#[derive(Debug, Default)]
pub struct SharedBusyFlag {
    outstanding: AtomicUsize,
    message: Mutex<String>,
}

impl SharedBusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.outstanding.load(Ordering::SeqCst) > 0
    }

    pub fn message(&self) -> String {
        self.message
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl LoadingIndicator for SharedBusyFlag {
    fn show(&self, message: &str) {
        self.outstanding.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut current) = self.message.lock() {
            *current = message.to_string();
        }
    }

    fn hide(&self) {
        // Saturating: a stray hide() never wraps the counter.
        let _ = self
            .outstanding
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }
}

/// Calls `hide()` when dropped, so the indicator clears on every exit path,
/// including a cancelled future.
pub struct LoadingGuard<'a> {
    indicator: &'a dyn LoadingIndicator,
}

impl<'a> LoadingGuard<'a> {
    pub fn start(indicator: &'a dyn LoadingIndicator, message: &str) -> Self {
        indicator.show(message);
        Self { indicator }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_clears_flag_on_drop() {
        let flag = SharedBusyFlag::new();
        {
            let _guard = LoadingGuard::start(&flag, "Calculating sigmoid...");
            assert!(flag.is_busy());
            assert_eq!(flag.message(), "Calculating sigmoid...");
        }
        assert!(!flag.is_busy());
    }

    #[test]
    fn test_overlapping_calls_keep_flag_up() {
        let flag = SharedBusyFlag::new();
        flag.show("a");
        flag.show("b");
        flag.hide();
        assert!(flag.is_busy());
        flag.hide();
        assert!(!flag.is_busy());
    }

    #[test]
    fn test_extra_hide_does_not_underflow() {
        let flag = SharedBusyFlag::new();
        flag.hide();
        assert!(!flag.is_busy());
        flag.show("again");
        assert!(flag.is_busy());
    }
}

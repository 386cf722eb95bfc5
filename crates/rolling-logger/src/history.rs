//! Log History
//!
//! Circular buffer of formatted log lines shared between the layer and the UI.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Bounded, cheaply clonable log line buffer (oldest lines are dropped first)
#[derive(Clone, Debug)]
pub struct LogHistory {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn push(&self, line: String) {
        let mut lines = self.lock();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Copy of the current lines, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    // A panic while holding the lock leaves the buffer usable.
    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PartialEq for LogHistory {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.lines, &other.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_oldest_when_full() {
        let history = LogHistory::new(3);
        for i in 0..5 {
            history.push(format!("line {}", i));
        }
        assert_eq!(history.snapshot(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_clones_share_lines() {
        let history = LogHistory::new(10);
        let other = history.clone();
        other.push("shared".to_string());
        assert_eq!(history.snapshot(), vec!["shared"]);
        assert_eq!(history, other);
        assert_ne!(history, LogHistory::new(10));
    }

    #[test]
    fn test_zero_capacity_keeps_last_line() {
        let history = LogHistory::new(0);
        history.push("a".to_string());
        history.push("b".to_string());
        assert_eq!(history.snapshot(), vec!["b"]);
    }
}

//! The shared busy flag and its scoped guard.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide "a search is running" flag.
///
/// Cloning yields another handle to the same flag. The flag is only ever
/// raised through [`try_acquire`](BusyFlag::try_acquire), and lowered when
/// the returned [`BusyGuard`] is dropped.
#[derive(Clone, Debug, Default)]
pub struct BusyFlag {
    busy: Arc<AtomicBool>,
}

impl BusyFlag {
    /// Create a new, idle flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a search currently holds the flag.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Raise the flag, or return `None` if it is already raised.
    pub fn try_acquire(&self) -> Option<BusyGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard {
                busy: Arc::clone(&self.busy),
            })
    }
}

/// Holds the busy flag raised; lowers it on drop, including during unwinding.
#[derive(Debug)]
#[must_use = "dropping the guard immediately releases the busy flag"]
pub struct BusyGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

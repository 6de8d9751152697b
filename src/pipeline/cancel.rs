use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared one-way cancellation signal.
///
/// Once cancelled, the dispatcher stops submitting work and workers leave
/// their loop; the reducer still drains whatever tiles are in flight.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

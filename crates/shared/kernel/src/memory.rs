//! Memory reclamation hint.
//!
//! Rust has no managed collector, so "run the GC" is a capability the caller plugs in
//! (an allocator purge, a cache flush, ...). The default [`NoopCollector`] does nothing.
//! The pause after the hint is part of the contract: it always blocks the calling
//! thread, so never call this from a latency-sensitive thread.

use std::thread;
use std::time::Duration;
use tracing::debug;

/// Pause applied by [`clean_memory`].
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(500);

/// Something that can be asked to reclaim memory. Best effort; it may ignore the request.
pub trait CollectorHint {
    fn request_collection(&self);
}

/// A collector hint that ignores every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCollector;

impl CollectorHint for NoopCollector {
    fn request_collection(&self) {}
}

impl<F> CollectorHint for F
where
    F: Fn(),
{
    fn request_collection(&self) {
        self();
    }
}

/// Requests a collection from the no-op collector and blocks for [`DEFAULT_PAUSE`].
pub fn clean_memory() {
    clean_memory_with(&NoopCollector, DEFAULT_PAUSE);
}

/// Requests a collection from `hint`, then blocks the calling thread for `pause`.
pub fn clean_memory_with(hint: &impl CollectorHint, pause: Duration) {
    hint.request_collection();
    debug!(pause_ms = pause.as_millis(), "Requested memory collection");
    if !pause.is_zero() {
        thread::sleep(pause);
    }
}

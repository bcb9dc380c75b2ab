//! Performance instrumentation for the drag hot path.
//!
//! Pointer-move handling is the only code here that runs at input rate, so
//! the instrumentation is deliberately small: a RAII scoped timer, a macro
//! that compiles to nothing without the `profiling` feature, and a global
//! per-operation aggregate so a soak run can be summarized at the end.
//!
//! Enable with:
//! ```toml
//! laneboard = { features = ["profiling"] }
//! ```

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{trace, warn};

/// Operations slower than this log a warning even when aggregation is all
/// the caller looks at.
pub const SLOW_OP_MS: f64 = 8.0;

/// Aggregate timing for one named operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpStats {
    pub count: u64,
    pub total_ms: f64,
    pub max_ms: f64,
}

impl OpStats {
    pub fn average_ms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_ms / self.count as f64
        }
    }
}

static OP_STATS: Lazy<Mutex<HashMap<&'static str, OpStats>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Snapshot of all aggregates recorded so far.
pub fn stats_snapshot() -> HashMap<&'static str, OpStats> {
    OP_STATS.lock().clone()
}

/// Drop all recorded aggregates.
pub fn reset_stats() {
    OP_STATS.lock().clear();
}

fn record_sample(name: &'static str, elapsed_ms: f64) {
    let mut stats = OP_STATS.lock();
    let entry = stats.entry(name).or_default();
    entry.count += 1;
    entry.total_ms += elapsed_ms;
    entry.max_ms = entry.max_ms.max(elapsed_ms);
}

/// RAII timer that records its scope's duration on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self { name, start: Instant::now(), threshold_ms }
    }

    /// Timer with the default slow-operation threshold, as used by
    /// `profile_scope!`.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, SLOW_OP_MS)
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        record_sample(self.name, elapsed_ms);

        if elapsed_ms >= self.threshold_ms {
            warn!(op = self.name, elapsed_ms, "slow operation");
        } else {
            trace!(op = self.name, elapsed_ms, "op timed");
        }
    }
}

/// Profile a scope with the given name. Zero-cost when profiling is
/// disabled.
///
/// # Example
/// ```ignore
/// use laneboard::profile_scope;
///
/// fn handle_drag_move() {
///     profile_scope!("handle_drag_move");
///     // ... event handling code ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

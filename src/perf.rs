//! Profiling instrumentation.
//!
//! Scoped timers for the event and render paths, compiled in only with the
//! `profiling` feature:
//!
//! ```ignore
//! use labelview::profile_scope;
//!
//! fn render() {
//!     profile_scope!("render_overlay");
//!     // ... work ...
//! }
//! ```

use std::time::Instant;
use tracing::{debug, warn};

/// Budget for one interaction step (60 FPS frame)
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// RAII timer that logs when the scope exceeds its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with a 1ms threshold
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > TARGET_FRAME_MS {
            warn!(op = self.name, elapsed_ms, "Slow operation");
        } else if elapsed_ms > self.threshold_ms {
            debug!(op = self.name, elapsed_ms, "Operation timing");
        }
    }
}

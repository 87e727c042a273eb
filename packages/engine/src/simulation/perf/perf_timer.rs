//! Wall-clock stopwatch for perf metrics.
//! wasm32 has no `Instant`, so the browser clock (`Date.now()`) is used there.

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Stamp {
    std::time::Instant::now()
}

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { start: now() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            // Date.now() is not monotonic
            (now() - self.start).max(0.0)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }
}

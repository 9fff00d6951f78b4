/// Millisecond stopwatch for perf counters.
///
/// `std::time::Instant` panics on wasm32-unknown-unknown, so the browser
/// build reads the JS clock instead.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    origin_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { origin_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { origin: std::time::Instant::now() }
        }
    }

    /// Time since `start`, in milliseconds
    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.origin_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.origin.elapsed().as_secs_f64() * 1000.0
        }
    }
}

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug)]
pub struct CspStats {
    request_count: AtomicUsize,
    nonce_generation_count: AtomicUsize,
    config_update_count: AtomicUsize,
    advisory_count: AtomicUsize,
    header_error_count: AtomicUsize,
    header_generation_count: AtomicUsize,
    header_generation_time_ns: AtomicUsize,
    start_time: Instant,
}

impl Default for CspStats {
    fn default() -> Self {
        Self {
            request_count: Default::default(),
            nonce_generation_count: Default::default(),
            config_update_count: Default::default(),
            advisory_count: Default::default(),
            header_error_count: Default::default(),
            header_generation_count: Default::default(),
            header_generation_time_ns: Default::default(),
            start_time: Instant::now(),
        }
    }
}

impl CspStats {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn nonce_generation_count(&self) -> usize {
        self.nonce_generation_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn config_update_count(&self) -> usize {
        self.config_update_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn advisory_count(&self) -> usize {
        self.advisory_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn header_error_count(&self) -> usize {
        self.header_error_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn header_generation_count(&self) -> usize {
        self.header_generation_count.load(Ordering::Relaxed)
    }

    // only responses that reached header assembly are timed
    #[inline]
    pub fn avg_header_generation_time_ns(&self) -> f64 {
        let count = self.header_generation_count();
        if count == 0 {
            0.0
        } else {
            self.header_generation_time_ns.load(Ordering::Relaxed) as f64 / count as f64
        }
    }

    #[inline]
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    #[cfg(feature = "stats")]
    #[inline]
    pub(crate) fn increment_request_count(&self) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
    }

    #[cfg(feature = "stats")]
    #[inline]
    pub(crate) fn increment_nonce_generation_count(&self) {
        self.nonce_generation_count.fetch_add(1, Ordering::Relaxed);
    }

    #[cfg(feature = "stats")]
    #[inline]
    pub(crate) fn increment_config_update_count(&self) {
        self.config_update_count.fetch_add(1, Ordering::Relaxed);
    }

    #[cfg(feature = "stats")]
    #[inline]
    pub(crate) fn increment_advisory_count(&self) {
        self.advisory_count.fetch_add(1, Ordering::Relaxed);
    }

    #[cfg(feature = "stats")]
    #[inline]
    pub(crate) fn increment_header_error_count(&self) {
        self.header_error_count.fetch_add(1, Ordering::Relaxed);
    }

    #[cfg(feature = "stats")]
    #[inline]
    pub(crate) fn record_header_generation(&self, time_ns: usize) {
        self.header_generation_count.fetch_add(1, Ordering::Relaxed);
        self.header_generation_time_ns
            .fetch_add(time_ns, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.request_count.store(0, Ordering::Relaxed);
        self.nonce_generation_count.store(0, Ordering::Relaxed);
        self.config_update_count.store(0, Ordering::Relaxed);
        self.advisory_count.store(0, Ordering::Relaxed);
        self.header_error_count.store(0, Ordering::Relaxed);
        self.header_generation_count.store(0, Ordering::Relaxed);
        self.header_generation_time_ns.store(0, Ordering::Relaxed);
    }
}

impl fmt::Display for CspStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Security Header Statistics:")?;
        writeln!(f, "  Uptime: {} seconds", self.uptime_secs())?;
        writeln!(f, "  Requests processed: {}", self.request_count())?;
        writeln!(f, "  Nonces generated: {}", self.nonce_generation_count())?;
        writeln!(f, "  Config updates: {}", self.config_update_count())?;
        writeln!(f, "  Advisories raised: {}", self.advisory_count())?;
        writeln!(f, "  Header encoding errors: {}", self.header_error_count())?;
        writeln!(f, "  Headers generated: {}", self.header_generation_count())?;
        writeln!(
            f,
            "  Average header generation time: {:.2} ns",
            self.avg_header_generation_time_ns()
        )?;
        Ok(())
    }
}

//! Persisted best-record scalar
//!
//! Each game keeps a single best distance/time/score in LocalStorage. The
//! value is monotonically non-decreasing within a process lifetime: it only
//! moves when a finished round beats it.

use crate::platform;

/// Storage key for the driving game's best distance
pub const BLIND_CORNER_KEY: &str = "blindCornerBest";
/// Storage key for the gravity toy's best survival time
pub const DONT_TOUCH_KEY: &str = "dttc-best-time";
/// Storage key for the prime game's best score
pub const PRIME_TRAP_KEY: &str = "prime-or-trap-best";

/// A single persisted high-water mark
#[derive(Debug, Clone)]
pub struct BestRecord {
    key: &'static str,
    value: f64,
}

impl BestRecord {
    /// Load the stored value for `key`; absent or unparsable values read as 0.
    pub fn load(key: &'static str) -> Self {
        let value = platform::storage_get(key)
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(0.0);
        Self { key, value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Report a finished round's metric. Returns true (and persists the new
    /// value) iff it beats the stored best.
    pub fn record(&mut self, metric: f64) -> bool {
        if metric <= self.value {
            return false;
        }
        self.value = metric;
        platform::storage_set(self.key, &self.value.to_string());
        log::info!("new best for {}: {}", self.key, self.value);
        true
    }
}

//! Unique test-data generation.
//!
//! Every user created against the shared live API must carry an email no
//! prior run has used. The suffix source is injectable so the same scenarios
//! replay deterministically against a mock server.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of per-run-unique suffixes for generated test data.
pub trait SuffixSource: Send + Sync {
    /// Next suffix. Successive calls within one run must never repeat.
    fn next_suffix(&self) -> String;
}

/// Wall-clock suffix fused with an in-process counter.
///
/// The millisecond timestamp separates runs; the counter separates scenarios
/// running in parallel within the same test binary.
pub struct ClockSuffix {
    counter: AtomicU64,
}

impl ClockSuffix {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for ClockSuffix {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixSource for ClockSuffix {
    fn next_suffix(&self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{millis}x{n}")
    }
}

/// Deterministic counter suffix for replaying scenarios against a mock
/// server.
pub struct SequenceSuffix {
    counter: AtomicU64,
}

impl SequenceSuffix {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(start: u64) -> Self {
        Self {
            counter: AtomicU64::new(start),
        }
    }
}

impl Default for SequenceSuffix {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixSource for SequenceSuffix {
    fn next_suffix(&self) -> String {
        self.counter.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

/// Insert `suffix` in front of the `@` of `email`.
///
/// `carlos.lopez@test.com` with suffix `17123` becomes
/// `carlos.lopez17123@test.com`. An address without an `@` gets the suffix
/// appended.
pub fn uniquify_email(email: &str, suffix: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}{suffix}@{domain}"),
        None => format!("{email}{suffix}"),
    }
}

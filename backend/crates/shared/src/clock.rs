//! Clock abstraction
//!
//! All temporal comparisons inside one logical operation must use a single
//! consistent instant, so use cases take a [`Clock`] instead of calling
//! `Utc::now()` inline. Production wires in [`SystemClock`]; tests inject a
//! [`FixedClock`] to make temporal classification deterministic.

use chrono::{DateTime, Utc};

/// Supplier of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

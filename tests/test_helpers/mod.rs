//! Deterministic clock and float helpers shared by unit and integration
//! tests. The library mounts this file as its `test_support` module.

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::Mutex;

/// Clock that only moves when a test advances it.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Creates a clock fixed at `millis` milliseconds after the Unix epoch.
    #[must_use]
    pub fn at_millis(millis: i64) -> Self {
        let start = Utc
            .timestamp_millis_opt(millis)
            .single()
            .unwrap_or_default();
        Self {
            now: Mutex::new(start),
        }
    }

    /// Moves the clock forward by `millis` milliseconds.
    pub fn advance_millis(&self, millis: i64) {
        if let Ok(mut now) = self.now.lock() {
            *now += TimeDelta::milliseconds(millis);
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::at_millis(1_700_000_000_000)
    }
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.lock().map(|now| *now).unwrap_or_default()
    }
}

/// Compares two percentages with a tolerance suited to display values.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "percentages are compared with a tolerance instead of exactly"
)]
pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

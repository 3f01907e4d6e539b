// tests/support/mocks/time.rs
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use masthead_core::application::ports::time::Clock;
use once_cell::sync::Lazy;

/// Fixed timestamp every test clock starts from.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Clock that stays put until a test advances it.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(fixed_now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

//! Time source used by status classification.
//!
//! Flight status depends on how the flight's date relates to "today"
//! (back-dating past flights, splitting upcoming from past, the mock
//! generator's status policy). Reading ambient system time directly would make
//! those decisions untestable around date boundaries, so everything that needs
//! the current time takes a `Clock` and tests pin it with `Clock::Fixed`.

use chrono::{DateTime, NaiveDate, Utc};

/// A capability handing out "now".
///
/// Production code uses `Clock::System`; tests use `Clock::Fixed` to make
/// date-boundary behavior deterministic.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    /// Real wall-clock time (UTC).
    System,

    /// A frozen instant, for tests.
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// The current instant.
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }

    /// The current calendar date (UTC).
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_the_pinned_instant() {
        let at: DateTime<Utc> = "2026-02-14T09:30:00Z".parse().unwrap();
        let clock = Clock::Fixed(at);

        assert_eq!(clock.now(), at);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 2, 14).unwrap());
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = Clock::System;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}

use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// Evenly sampled span of instants, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationWindow {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    step: Duration,
}

impl ObservationWindow {
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>, step: Duration) -> Result<Self> {
        if step <= Duration::zero() {
            return Err(Error::invalid_window(format!(
                "sampling step must be positive, got {step}"
            )));
        }
        if end < start {
            return Err(Error::invalid_window(format!(
                "end {end} precedes start {start}"
            )));
        }
        Ok(Self { start, end, step })
    }

    /// Local midnight of `date` through the same instant 24 hours later.
    pub fn for_date(date: NaiveDate, timezone: Tz, step: Duration) -> Result<Self> {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| Error::invalid_window(format!("no midnight on {date}")))?;
        let start = timezone
            .from_local_datetime(&midnight)
            .earliest()
            .ok_or_else(|| {
                Error::invalid_window(format!("local midnight of {date} does not exist in {timezone}"))
            })?;
        Self::new(start, start + Duration::days(1), step)
    }

    pub fn start(&self) -> DateTime<Tz> {
        self.start
    }

    pub fn end(&self) -> DateTime<Tz> {
        self.end
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn sample_count(&self) -> usize {
        (total_nanos(self.end - self.start) / total_nanos(self.step)) as usize + 1
    }

    /// `start + k * step` for every `k` that does not overshoot `end`.
    pub fn samples(&self) -> Vec<DateTime<Tz>> {
        let count = self.sample_count();
        let mut samples = Vec::with_capacity(count);
        let mut t = self.start;
        while t <= self.end {
            samples.push(t);
            t = t + self.step;
        }
        samples
    }
}

fn total_nanos(d: Duration) -> i128 {
    d.num_seconds() as i128 * 1_000_000_000 + d.subsec_nanos() as i128
}

use chrono::{DateTime, Duration};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// A fixed observer on the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Tz,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, timezone: Tz) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidLocation {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
            timezone,
        })
    }

    /// Resolves an IANA identifier such as `Europe/Helsinki`.
    pub fn with_timezone_name(latitude: f64, longitude: f64, timezone: &str) -> Result<Self> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| Error::position(format!("unknown timezone '{timezone}'")))?;
        Self::new(latitude, longitude, tz)
    }
}

/// Topocentric sun position for one time sample, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Clockwise from north, in [0, 360).
    pub azimuth: f64,
    pub elevation: f64,
}

/// Which way the window faces and how wide its view of the sky is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowOrientation {
    pub azimuth_center: f64,
    pub azimuth_half_range: f64,
}

/// A fixed obstacle in front of the window. Height and distance share a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstructionProfile {
    pub height: f64,
    pub distance: f64,
}

/// Closed azimuth arc `[min, max]`.
///
/// Bounds are kept unwrapped, so `min` may be negative and `max` may reach
/// or pass 360 for windows facing north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AzimuthInterval {
    pub min: f64,
    pub max: f64,
}

impl AzimuthInterval {
    /// True when the interval crosses the 0°/360° meridian.
    pub fn wraps(&self) -> bool {
        self.min < 0.0 || self.max >= 360.0
    }

    /// Membership on the compass circle.
    ///
    /// The bounds are compared linearly; a crossing interval also tests the
    /// azimuth shifted by one full turn in either direction.
    pub fn contains(&self, azimuth: f64) -> bool {
        let within = |az: f64| az >= self.min && az <= self.max;
        if !self.wraps() {
            return within(azimuth);
        }
        within(azimuth) || within(azimuth - 360.0) || within(azimuth + 360.0)
    }
}

/// A maximal run of consecutive sunlit samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunlitInterval {
    pub start: DateTime<Tz>,
    /// Last sunlit sample of the run, not the first dark one.
    pub end: DateTime<Tz>,
    pub sample_count: usize,
}

/// Reduced outcome of one day's evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub sunlit_sample_count: usize,
    pub total_sunlit_duration: Duration,
    pub first_sunlit_instant: Option<DateTime<Tz>>,
    pub last_sunlit_instant: Option<DateTime<Tz>>,
}

impl Summary {
    pub fn is_sunlit(&self) -> bool {
        self.sunlit_sample_count > 0
    }

    pub fn sunlit_hours(&self) -> f64 {
        self.total_sunlit_duration.num_seconds() as f64 / 3600.0
    }
}

/// One row of the per-sample series handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRecord {
    pub instant: DateTime<Tz>,
    pub azimuth: f64,
    pub elevation: f64,
    pub sunlit: bool,
}

/// Everything a presentation layer needs to describe or chart one day.
#[derive(Debug, Clone, PartialEq)]
pub struct SunlightReport {
    pub location: Location,
    pub min_elevation: f64,
    pub azimuth_interval: AzimuthInterval,
    pub sampling_step: Duration,
    pub samples: Vec<SampleRecord>,
    pub intervals: Vec<SunlitInterval>,
    pub summary: Summary,
}

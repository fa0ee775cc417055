use chrono::{Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::{Location, ObstructionProfile, WindowOrientation};

/// Inputs for one day's estimate, as read from a JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SunlightConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    /// Local calendar date. `None` means today in `timezone`.
    pub date: Option<NaiveDate>,
    pub window_azimuth_center: f64,
    pub window_azimuth_half_range: f64,
    pub obstacle_height: f64,
    pub obstacle_distance: f64,
    pub sampling_step_minutes: i64,
}

impl Default for SunlightConfig {
    fn default() -> Self {
        Self {
            latitude: 60.1695,
            longitude: 24.9354,
            timezone: "Europe/Helsinki".to_string(),
            date: None,
            window_azimuth_center: 230.0,
            window_azimuth_half_range: 30.0,
            obstacle_height: 9.0,
            obstacle_distance: 10.0,
            sampling_step_minutes: 5,
        }
    }
}

impl SunlightConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn location(&self) -> Result<Location> {
        Location::with_timezone_name(self.latitude, self.longitude, &self.timezone)
    }

    pub fn orientation(&self) -> WindowOrientation {
        WindowOrientation {
            azimuth_center: self.window_azimuth_center,
            azimuth_half_range: self.window_azimuth_half_range,
        }
    }

    pub fn obstruction(&self) -> ObstructionProfile {
        ObstructionProfile {
            height: self.obstacle_height,
            distance: self.obstacle_distance,
        }
    }

    pub fn sampling_step(&self) -> Result<Duration> {
        if self.sampling_step_minutes <= 0 {
            return Err(Error::invalid_window(format!(
                "sampling step must be positive, got {} minutes",
                self.sampling_step_minutes
            )));
        }
        Duration::try_minutes(self.sampling_step_minutes).ok_or_else(|| {
            Error::invalid_window(format!(
                "sampling step of {} minutes is out of range",
                self.sampling_step_minutes
            ))
        })
    }

    /// The configured date, or today's date in `timezone` read once from the
    /// clock. Callers should resolve once and reuse the result.
    pub fn resolve_date(&self, timezone: Tz) -> NaiveDate {
        match self.date {
            Some(date) => date,
            None => {
                let today = Utc::now().with_timezone(&timezone).date_naive();
                info!(%today, %timezone, "no date configured, using today");
                today
            }
        }
    }
}

use chrono::{DateTime, Datelike};
use chrono_tz::Tz;
use solar_positioning::{spa, time::DeltaT};

use crate::error::{Error, Result};
use crate::types::{Location, SolarPosition};

/// Produces one [`SolarPosition`] per instant, in the same order.
///
/// Implementations must be deterministic: the same location and instants
/// always yield the same positions.
pub trait SolarPositionProvider {
    fn positions(&self, location: &Location, instants: &[DateTime<Tz>])
        -> Result<Vec<SolarPosition>>;
}

/// NREL SPA without refraction, ΔT estimated from the date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaSolarModel {
    /// Metres above sea level.
    pub observer_elevation: f64,
}

impl SpaSolarModel {
    pub const MIN_YEAR: i32 = -2000;
    pub const MAX_YEAR: i32 = 6000;

    pub fn at_elevation(observer_elevation: f64) -> Self {
        Self { observer_elevation }
    }

    pub fn position_at(&self, location: &Location, instant: &DateTime<Tz>) -> Result<SolarPosition> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&instant.year()) {
            return Err(Error::position(format!(
                "{instant} is outside the supported years {}..={}",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        let delta_t = DeltaT::estimate_from_date_like(*instant)
            .map_err(|e| Error::position(format!("delta T for {instant}: {e}")))?;
        let position = spa::solar_position(
            *instant,
            location.latitude,
            location.longitude,
            self.observer_elevation,
            delta_t,
            None,
        )
        .map_err(|e| Error::position(format!("SPA at {instant}: {e}")))?;
        Ok(SolarPosition {
            azimuth: position.azimuth(),
            elevation: 90.0 - position.zenith_angle(),
        })
    }
}

impl SolarPositionProvider for SpaSolarModel {
    fn positions(
        &self,
        location: &Location,
        instants: &[DateTime<Tz>],
    ) -> Result<Vec<SolarPosition>> {
        instants
            .iter()
            .map(|instant| self.position_at(location, instant))
            .collect()
    }
}

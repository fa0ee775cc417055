use crate::error::{Error, Result};
use crate::types::{AzimuthInterval, ObstructionProfile, WindowOrientation};

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Into [0, 360).
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if a >= 360.0 { 0.0 } else { a }
}

/// Elevation, in degrees, above which the sun clears an obstacle of
/// `height` standing `distance` away.
pub fn min_elevation(height: f64, distance: f64) -> Result<f64> {
    if !(height > 0.0 && height.is_finite()) {
        return Err(Error::invalid_geometry(format!(
            "obstacle height must be positive, got {height}"
        )));
    }
    if !(distance > 0.0 && distance.is_finite()) {
        return Err(Error::invalid_geometry(format!(
            "obstacle distance must be positive, got {distance}"
        )));
    }
    Ok(rad_to_deg((height / distance).atan()))
}

/// `[center - half_range, center + half_range]` with the centre normalized
/// into [0, 360). The bounds themselves are left unwrapped.
pub fn azimuth_interval(center: f64, half_range: f64) -> Result<AzimuthInterval> {
    if !center.is_finite() {
        return Err(Error::invalid_geometry(format!(
            "window azimuth centre must be finite, got {center}"
        )));
    }
    if !(0.0..180.0).contains(&half_range) {
        return Err(Error::invalid_geometry(format!(
            "window azimuth half-range must be in [0, 180), got {half_range}"
        )));
    }
    let center = normalize_angle(center);
    Ok(AzimuthInterval {
        min: center - half_range,
        max: center + half_range,
    })
}

impl ObstructionProfile {
    pub fn min_elevation(&self) -> Result<f64> {
        min_elevation(self.height, self.distance)
    }
}

impl WindowOrientation {
    pub fn azimuth_interval(&self) -> Result<AzimuthInterval> {
        azimuth_interval(self.azimuth_center, self.azimuth_half_range)
    }
}

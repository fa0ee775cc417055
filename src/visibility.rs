use crate::types::{AzimuthInterval, SolarPosition};

/// Whether the sun at `position` shines through the window.
///
/// Elevation must be strictly above the obstruction angle: grazing
/// incidence counts as blocked.
pub fn is_sunlit(position: &SolarPosition, interval: &AzimuthInterval, min_elevation: f64) -> bool {
    interval.contains(position.azimuth) && position.elevation > min_elevation
}

/// One flag per position, in order.
pub fn evaluate(
    positions: &[SolarPosition],
    interval: &AzimuthInterval,
    min_elevation: f64,
) -> Vec<bool> {
    positions
        .iter()
        .map(|p| is_sunlit(p, interval, min_elevation))
        .collect()
}

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::aggregate::{aggregate, sunlit_intervals};
use crate::config::SunlightConfig;
use crate::error::{Error, Result};
use crate::solar::SolarPositionProvider;
use crate::time_grid::ObservationWindow;
use crate::types::{SampleRecord, SunlightReport};
use crate::visibility::evaluate;

/// Estimate direct sunlight through the window on the configured date.
///
/// A missing date is resolved to today exactly once, before any work.
pub fn estimate<P: SolarPositionProvider>(
    config: &SunlightConfig,
    provider: &P,
) -> Result<SunlightReport> {
    let location = config.location()?;
    let date = config.resolve_date(location.timezone);
    estimate_for_date(config, date, provider)
}

/// Same as [`estimate`] with the calendar date supplied by the caller.
#[instrument(skip(config, provider), fields(tz = %config.timezone))]
pub fn estimate_for_date<P: SolarPositionProvider>(
    config: &SunlightConfig,
    date: NaiveDate,
    provider: &P,
) -> Result<SunlightReport> {
    // geometry first: bad input never reaches the provider
    let min_elevation = config.obstruction().min_elevation()?;
    let azimuth_interval = config.orientation().azimuth_interval()?;
    let location = config.location()?;
    let step = config.sampling_step()?;
    debug!(
        min_elevation,
        azimuth_min = azimuth_interval.min,
        azimuth_max = azimuth_interval.max,
        wraps = azimuth_interval.wraps(),
        "resolved window geometry"
    );

    let window = ObservationWindow::for_date(date, location.timezone, step)?;
    let instants = window.samples();
    debug!(samples = instants.len(), "built time grid");

    let positions = provider.positions(&location, &instants)?;
    Error::check_lengths(instants.len(), positions.len())?;

    let flags = evaluate(&positions, &azimuth_interval, min_elevation);
    let summary = aggregate(&instants, &flags, step)?;
    let intervals = sunlit_intervals(&instants, &flags)?;

    if summary.is_sunlit() {
        info!(
            sunlit_samples = summary.sunlit_sample_count,
            runs = intervals.len(),
            hours = summary.sunlit_hours(),
            "direct sunlight found"
        );
    } else {
        info!("no direct sunlight through the window");
    }

    let samples = instants
        .iter()
        .zip(&positions)
        .zip(&flags)
        .map(|((&instant, position), &sunlit)| SampleRecord {
            instant,
            azimuth: position.azimuth,
            elevation: position.elevation,
            sunlit,
        })
        .collect();

    Ok(SunlightReport {
        location,
        min_elevation,
        azimuth_interval,
        sampling_step: step,
        samples,
        intervals,
        summary,
    })
}

use chrono::{DateTime, Duration};
use chrono_tz::Tz;

use crate::error::{Error, Result};
use crate::types::{Summary, SunlitInterval};

/// Total sunlit time plus the first and last sunlit sample of the day.
///
/// The bounds span the whole day: if the sun enters the window twice they
/// cover both runs. See [`sunlit_intervals`] for the breakdown.
pub fn aggregate(samples: &[DateTime<Tz>], flags: &[bool], step: Duration) -> Result<Summary> {
    Error::check_lengths(samples.len(), flags.len())?;

    let mut sunlit = samples
        .iter()
        .zip(flags)
        .filter(|&(_, &flag)| flag)
        .map(|(t, _)| *t);
    let first = sunlit.next();
    let (count, last) = match first {
        None => (0, None),
        Some(first) => sunlit.fold((1, Some(first)), |(n, _), t| (n + 1, Some(t))),
    };

    Ok(Summary {
        sunlit_sample_count: count,
        total_sunlit_duration: step * count as i32,
        first_sunlit_instant: first,
        last_sunlit_instant: last,
    })
}

/// Every maximal run of `true` flags, in time order.
pub fn sunlit_intervals(samples: &[DateTime<Tz>], flags: &[bool]) -> Result<Vec<SunlitInterval>> {
    Error::check_lengths(samples.len(), flags.len())?;

    let mut intervals = Vec::new();
    let mut current: Option<SunlitInterval> = None;
    for (&t, &flag) in samples.iter().zip(flags) {
        if !flag {
            intervals.extend(current.take());
            continue;
        }
        match current.as_mut() {
            Some(run) => {
                run.end = t;
                run.sample_count += 1;
            }
            None => {
                current = Some(SunlitInterval {
                    start: t,
                    end: t,
                    sample_count: 1,
                })
            }
        }
    }
    intervals.extend(current);
    Ok(intervals)
}

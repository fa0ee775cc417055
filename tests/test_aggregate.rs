use chrono::{DateTime, Duration, TimeZone};
use chrono_tz::Tz;

use window_sunlight::aggregate::{aggregate, sunlit_intervals};
use window_sunlight::Error;

fn grid(n: usize) -> Vec<DateTime<Tz>> {
    let start = Tz::UTC.with_ymd_and_hms(2025, 6, 21, 0, 0, 0).unwrap();
    (0..n as i64).map(|k| start + Duration::minutes(5 * k)).collect()
}

fn flags(pattern: &str) -> Vec<bool> {
    pattern.chars().map(|c| c == '#').collect()
}

// ── Summary ──

#[test]
fn test_aggregate_overall_bounds() {
    let samples = grid(10);
    let f = flags("..##..#...");
    let summary = aggregate(&samples, &f, Duration::minutes(5)).unwrap();
    assert_eq!(summary.sunlit_sample_count, 3);
    assert_eq!(summary.total_sunlit_duration, Duration::minutes(15));
    assert_eq!(summary.first_sunlit_instant, Some(samples[2]));
    assert_eq!(summary.last_sunlit_instant, Some(samples[6]));
    assert!(summary.is_sunlit());
    assert_eq!(summary.sunlit_hours(), 0.25);
}

#[test]
fn test_aggregate_single_sample() {
    let samples = grid(5);
    let summary = aggregate(&samples, &flags("...#."), Duration::minutes(5)).unwrap();
    assert_eq!(summary.first_sunlit_instant, summary.last_sunlit_instant);
    assert_eq!(summary.first_sunlit_instant, Some(samples[3]));
}

#[test]
fn test_aggregate_no_sunlight_is_not_an_error() {
    let samples = grid(6);
    let summary = aggregate(&samples, &flags("......"), Duration::minutes(5)).unwrap();
    assert_eq!(summary.sunlit_sample_count, 0);
    assert_eq!(summary.total_sunlit_duration, Duration::zero());
    assert_eq!(summary.first_sunlit_instant, None);
    assert_eq!(summary.last_sunlit_instant, None);
    assert!(!summary.is_sunlit());
}

#[test]
fn test_aggregate_length_mismatch() {
    let samples = grid(4);
    let err = aggregate(&samples, &flags("##"), Duration::minutes(5)).unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { expected: 4, actual: 2 }));
}

// ── Runs ──

#[test]
fn test_intervals_split_runs() {
    let samples = grid(12);
    let runs = sunlit_intervals(&samples, &flags("##..###..#.#")).unwrap();
    let spans: Vec<_> = runs.iter().map(|r| (r.start, r.end, r.sample_count)).collect();
    assert_eq!(
        spans,
        vec![
            (samples[0], samples[1], 2),
            (samples[4], samples[6], 3),
            (samples[9], samples[9], 1),
            (samples[11], samples[11], 1),
        ]
    );
}

#[test]
fn test_intervals_empty_and_full() {
    let samples = grid(4);
    assert!(sunlit_intervals(&samples, &flags("....")).unwrap().is_empty());
    let runs = sunlit_intervals(&samples, &flags("####")).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!((runs[0].start, runs[0].end, runs[0].sample_count), (samples[0], samples[3], 4));
}

#[test]
fn test_intervals_length_mismatch() {
    let samples = grid(3);
    assert!(matches!(
        sunlit_intervals(&samples, &flags("#")),
        Err(Error::LengthMismatch { .. })
    ));
}

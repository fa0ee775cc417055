use std::env;
use std::fs;

use tracing_subscriber::FmtSubscriber;

use window_sunlight::{estimate, SpaSolarModel, SunlightConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match env::args().nth(1) {
        Some(path) => SunlightConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => SunlightConfig::default(),
    };

    let report = estimate(&config, &SpaSolarModel::default())?;
    let summary = &report.summary;

    println!("=== Direct Sunlight Through Window ===");
    println!(
        "Location: {:.4}°, {:.4}° ({})",
        report.location.latitude, report.location.longitude, report.location.timezone
    );
    println!(
        "Window arc: {:.0}°..{:.0}°, obstruction limit {:.1}°",
        report.azimuth_interval.min, report.azimuth_interval.max, report.min_elevation
    );
    println!();

    match (summary.first_sunlit_instant, summary.last_sunlit_instant) {
        (Some(start), Some(end)) => {
            println!(
                "Estimated direct sunlight through window: {:.2} hours",
                summary.sunlit_hours()
            );
            println!("Direct sunlight starts at: {}", start.format("%H:%M"));
            println!("Direct sunlight ends at:   {}", end.format("%H:%M"));
            if report.intervals.len() > 1 {
                for run in &report.intervals {
                    println!(
                        "  {} - {} ({} samples)",
                        run.start.format("%H:%M"),
                        run.end.format("%H:%M"),
                        run.sample_count
                    );
                }
            }
        }
        _ => println!(
            "No direct sunlight through the window (due to orientation or obstructions)."
        ),
    }
    Ok(())
}

pub mod aggregate;
pub mod config;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod solar;
pub mod time_grid;
pub mod types;
pub mod visibility;

pub use aggregate::{aggregate, sunlit_intervals};

pub use config::SunlightConfig;

pub use error::{Error, Result};

pub use geometry::{azimuth_interval, deg_to_rad, min_elevation, normalize_angle, rad_to_deg};

pub use pipeline::{estimate, estimate_for_date};

pub use solar::{SolarPositionProvider, SpaSolarModel};

pub use time_grid::ObservationWindow;

pub use types::{
    AzimuthInterval, Location, ObstructionProfile, SampleRecord, SolarPosition, Summary,
    SunlightReport, SunlitInterval, WindowOrientation,
};

pub use visibility::{evaluate, is_sunlit};

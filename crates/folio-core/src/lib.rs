pub mod config;
pub mod content;
pub mod error;
pub mod geometry;
pub mod route;
pub mod tracker;

pub use config::{AppConfig, EasingType, NavConfig, ScrollConfig};
pub use error::{Error, Result};
pub use geometry::{Indicator, IndicatorGeometry, NavSnapshot};
pub use route::{Location, Route};
pub use tracker::{ScrollMetrics, SectionOffsets, SectionTracker, TrackerConfig};

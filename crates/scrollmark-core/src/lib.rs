pub mod config;
pub mod error;
pub mod tracker;
pub mod viewport;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use tracker::{axis_progress, Progress, ScrollProgressTracker};
pub use viewport::{AxisPair, DetachedViewport, SubscriptionId, ViewportSignal, ViewportSource};

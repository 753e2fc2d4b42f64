pub mod config;
pub mod domain;
pub mod handler;
pub mod logging;
pub mod render;

pub use config::{ConfigError, TargetConfig};
pub use domain::{compute, select_phrasing, Breakdown, Phrasing, TargetInstant, Unit};
pub use handler::{Countdown, Output};
pub use render::{RenderError, Renderer};

use log::{debug, error, info};

use crate::domain::{format_time, Breakdown, TargetInstant};
use crate::render::RenderError;

pub fn log_target(target: &TargetInstant) {
    info!("🎯 Counting against {}", target.at().to_rfc3339());
}

pub fn log_rendered(b: &Breakdown) {
    let direction = if b.has_passed { "since" } else { "until" };
    debug!("⏱️ {} {}", format_time(b), direction);
}

pub fn log_render_failure(template: &str, err: &RenderError) {
    error!("❌ Render failed for `{}`: {}", template, err);
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{ConfigError, TargetConfig};
use crate::domain::{compute, Page, TargetInstant};
use crate::logging::{log_render_failure, log_rendered};
use crate::render::Renderer;

// ==================================================
// RESPONSE ENVELOPE
// ==================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl Output {
    pub fn html(body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "text/html".to_string());

        Self {
            status_code: 200,
            headers,
            body,
        }
    }

    pub fn bad_request() -> Self {
        Self {
            status_code: 400,
            headers: BTreeMap::new(),
            body: String::new(),
        }
    }
}

// ==================================================
// HANDLER
// ==================================================

/// Everything an invocation needs; built once at startup.
#[derive(Debug, Clone)]
pub struct Countdown {
    target: TargetInstant,
    renderer: Renderer,
}

impl Countdown {
    pub fn new(target: TargetInstant, renderer: Renderer) -> Self {
        Self { target, renderer }
    }

    /// Reads the target from the environment and pairs it with the embedded page.
    pub fn from_env() -> Result<Self, ConfigError> {
        let target = TargetConfig::from_env()?.target()?;
        Ok(Self::new(target, Renderer::default()))
    }

    pub fn target(&self) -> &TargetInstant {
        &self.target
    }

    pub fn handle(&self) -> Output {
        self.handle_at(Utc::now())
    }

    /// Render errors become a 400 with an empty body; they never escape.
    pub fn handle_at(&self, now: DateTime<Utc>) -> Output {
        let breakdown = compute(&self.target, now);
        let page = Page::from(&breakdown);

        match self.renderer.render(&page) {
            Ok(body) => {
                log_rendered(&breakdown);
                Output::html(body)
            }
            Err(e) => {
                log_render_failure(self.renderer.name(), &e);
                Output::bad_request()
            }
        }
    }
}

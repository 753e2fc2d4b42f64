//! HTML rendering of the countdown page.
//!
//! The page template is embedded in the binary and parsed on every render,
//! so a broken or missing asset surfaces as a per-request [`RenderError`]
//! instead of a startup crash.

pub mod errors;

use handlebars::Handlebars;
use rust_embed::RustEmbed;
use std::borrow::Cow;

use crate::domain::Page;
pub use errors::RenderError;

pub const DEFAULT_TEMPLATE: &str = "countdown.html";

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Templates;

#[derive(Debug, Clone)]
enum Source {
    Embedded(String),
    Inline(String),
}

#[derive(Debug, Clone)]
pub struct Renderer {
    source: Source,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::embedded(DEFAULT_TEMPLATE)
    }
}

impl Renderer {
    /// Renders the embedded asset `name` from `templates/`.
    pub fn embedded(name: impl Into<String>) -> Self {
        Self {
            source: Source::Embedded(name.into()),
        }
    }

    /// Renders a template given as text.
    pub fn inline(template: impl Into<String>) -> Self {
        Self {
            source: Source::Inline(template.into()),
        }
    }

    pub fn name(&self) -> &str {
        match &self.source {
            Source::Embedded(name) => name,
            Source::Inline(_) => "inline",
        }
    }

    fn load(&self) -> Result<Cow<'_, str>, RenderError> {
        match &self.source {
            Source::Inline(text) => Ok(Cow::Borrowed(text.as_str())),
            Source::Embedded(name) => {
                let file = Templates::get(name).ok_or_else(|| RenderError::Missing(name.clone()))?;
                String::from_utf8(file.data.into_owned())
                    .map(Cow::Owned)
                    .map_err(|_| RenderError::NotUtf8(name.clone()))
            }
        }
    }

    pub fn render(&self, page: &Page) -> Result<String, RenderError> {
        let template = self.load()?;

        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars
            .register_template_string(self.name(), template.as_ref())
            .map_err(|e| RenderError::Parse(e.to_string()))?;

        handlebars
            .render(self.name(), page)
            .map_err(|e| RenderError::Render(e.to_string()))
    }
}

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    Missing(String),
    NotUtf8(String),
    Parse(String),
    Render(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Missing(name) => write!(f, "Template asset not found: {}", name),
            RenderError::NotUtf8(name) => write!(f, "Template asset is not valid UTF-8: {}", name),
            RenderError::Parse(msg) => write!(f, "Failed to parse template: {}", msg),
            RenderError::Render(msg) => write!(f, "Failed to render template: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

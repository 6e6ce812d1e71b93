//! Rendering: turn a finished report model into text.
//!
//! Renderers hold no business logic. Everything they print is already
//! computed in [`ReportModel`].

mod bbcode;
mod json;

pub use bbcode::BbCode;
pub use json::Json;

use crate::report::ReportModel;

/// Errors that can occur while rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("formatting failed")]
    Fmt(#[from] std::fmt::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Turns a report model into output text.
pub trait Renderer {
    fn render(&self, model: &ReportModel<'_>) -> Result<String, RenderError>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Forum bulletin markup.
    #[default]
    BbCode,
    /// The report model as pretty-printed JSON.
    Json,
}

impl Format {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Self::BbCode => Box::new(BbCode),
            Self::Json => Box::new(Json),
        }
    }
}

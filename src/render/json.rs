//! JSON renderer: the report model as-is, for other tools to consume.

use crate::report::ReportModel;

use super::{RenderError, Renderer};

/// Renders the report model as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Renderer for Json {
    fn render(&self, model: &ReportModel<'_>) -> Result<String, RenderError> {
        let mut json = serde_json::to_string_pretty(model)?;
        json.push('\n');
        Ok(json)
    }
}

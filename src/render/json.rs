//! JSON rendering of articles and compiled plans.

use serde::Serialize;

use crate::compile::ArticlePlan;
use crate::error::{Error, Result};
use crate::model::Article;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert an article back to its wire format.
pub fn to_json(article: &Article, format: JsonFormat) -> Result<String> {
    serialize(article, format)
}

/// Convert a compiled plan to JSON.
pub fn plan_to_json(plan: &ArticlePlan, format: JsonFormat) -> Result<String> {
    serialize(plan, format)
}

fn serialize<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

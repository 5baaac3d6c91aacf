use crate::domain::model::{FilterResult, OutputFormat};
use crate::utils::error::Result;

pub fn render(result: &FilterResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

/// Header, one name per line, then a blank line and the total.
pub fn render_text(result: &FilterResult) -> String {
    let mut lines = Vec::with_capacity(result.cities.len() + 4);
    lines.push(format!(
        "List of cities in {}km radius from {}:",
        result.radius_km, result.reference.name
    ));
    lines.push("-".repeat(43));
    lines.extend(result.cities.iter().cloned());
    lines.push(String::new());
    lines.push(format!("Total: {}", result.total()));
    lines.join("\n")
}

//! Human-readable formatting of item records.

use anyhow::{anyhow, Result};
use serde_json::Value;

/// Formats one item record as a multi-line block:
///
/// ```text
/// C25804: 10K 0603 resistor, 0603
///     Resistance: 10K
///     price:
///         100:    0.004
/// ```
///
/// Attributes whose value is `-` or `0` are suppressed; the remaining keys
/// are aligned to the longest one. Required fields (`info.number`,
/// `info.title`, `package`, `attributes`, `price`) are a data contract:
/// a record missing any of them is an error, not something to skip.
pub fn format_item(item: &Value) -> Result<String> {
    let number = text(field(item, &["info", "number"])?);
    let title = text(field(item, &["info", "title"])?);
    let package = text(field(item, &["package"])?);

    let mut lines = vec![format!("{}: {}, {}", number, title, package)];

    let attributes = field(item, &["attributes"])?
        .as_object()
        .ok_or_else(|| anyhow!("record field `attributes` is not an object"))?;

    let shown: Vec<(&String, String)> = attributes
        .iter()
        .map(|(k, v)| (k, text(v)))
        .filter(|(_, v)| v != "-" && v != "0")
        .collect();

    let max_key_len = shown.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in &shown {
        lines.push(format!("\t{}:{} {}", key, " ".repeat(max_key_len - key.len()), value));
    }

    lines.push("\tprice:".to_string());
    let tiers = field(item, &["price"])?
        .as_array()
        .ok_or_else(|| anyhow!("record field `price` is not an array"))?;
    for tier in tiers {
        let quantity = tier.get(0).map(text).unwrap_or_default();
        let price = tier.get(1).map(text).unwrap_or_default();
        lines.push(format!("\t\t{}:\t{}", quantity, price));
    }

    Ok(lines.join("\n"))
}

/// Walks a nested field path, erroring on the first missing segment.
fn field<'a>(item: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut current = item;
    for segment in path {
        current = current
            .get(segment)
            .ok_or_else(|| anyhow!("record missing required field `{}`", path.join(".")))?;
    }
    Ok(current)
}

/// Scalar rendering: strings verbatim, everything else as JSON.
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

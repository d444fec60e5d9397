use panel_api::types::RecordId;
use panel_api::{Filter, FilterValue, Scalar};

use crate::error::PanelError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_FILTER_LENGTH: usize = 200;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, PanelError> {
    if input.len() > max_len {
        return Err(PanelError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(PanelError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a search string: enforce length, strip control chars, trim.
pub fn validate_search(input: &str) -> Result<String, PanelError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate a record id (must be >= 1).
pub fn validate_id(id: RecordId) -> Result<RecordId, PanelError> {
    if id < 1 {
        return Err(PanelError::InvalidInput("id must be >= 1".to_string()));
    }
    Ok(id)
}

/// Parse a `key=value` filter argument. Integers and `true`/`false` keep
/// their type; everything else is a string.
pub fn parse_filter_pair(input: &str) -> Result<(String, Scalar), PanelError> {
    let (key, value) = input.split_once('=').ok_or_else(|| {
        PanelError::InvalidInput(format!("filter '{}' is not in key=value form", input))
    })?;
    let key = key.trim();
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(PanelError::InvalidInput(format!(
            "invalid filter field '{}': use letters, digits and underscores",
            key
        )));
    }
    let value = sanitize_text(value, MAX_FILTER_LENGTH)?;
    let scalar = if let Ok(i) = value.parse::<i64>() {
        Scalar::Int(i)
    } else {
        match value.as_str() {
            "true" => Scalar::Bool(true),
            "false" => Scalar::Bool(false),
            _ => Scalar::Str(value),
        }
    };
    Ok((key.to_string(), scalar))
}

/// Build a filter from repeated `key=value` arguments. A key given more than
/// once becomes a multi-valued field.
pub fn parse_filters(inputs: &[String]) -> Result<Filter, PanelError> {
    let mut filter = Filter::new();
    for input in inputs {
        let (key, scalar) = parse_filter_pair(input)?;
        let merged = match filter.get(&key) {
            Some(FilterValue::One(prev)) => FilterValue::Many(vec![prev.clone(), scalar]),
            Some(FilterValue::Many(prev)) => {
                let mut all = prev.clone();
                all.push(scalar);
                FilterValue::Many(all)
            }
            _ => FilterValue::One(scalar),
        };
        filter.set(&key, merged);
    }
    Ok(filter)
}

//! Recognition of the raw list payload shapes the backend is known to return.

use serde_json::{Map, Value};

/// A raw list payload, classified by which keys it carries.
///
/// Variants are tried in declaration order; the first match wins.
#[derive(Clone, Debug, PartialEq)]
pub enum RawPayload {
    /// `{metaData, data: [..], pagination: {..}}`
    Canonical {
        meta: Value,
        data: Vec<Value>,
        pagination: Map<String, Value>,
    },
    /// `{metaData, data: [..]}` with no pagination block.
    MetaOnly { meta: Value, data: Vec<Value> },
    /// `{data: [..], pagination: {count: <number>, ..}}` without `metaData`.
    BarePaginated {
        data: Vec<Value>,
        pagination: Map<String, Value>,
    },
    /// `{results: [..], count, next, previous}`
    OffsetList {
        results: Vec<Value>,
        count: u64,
        next: Option<String>,
        previous: Option<String>,
    },
    Unrecognized(Value),
}

impl RawPayload {
    pub fn classify(value: Value) -> Self {
        let Value::Object(mut obj) = value else {
            return RawPayload::Unrecognized(value);
        };

        let has_meta = obj.get("metaData").is_some_and(|m| !m.is_null());
        let data_is_list = obj.get("data").is_some_and(Value::is_array);
        let pagination_is_object = obj.get("pagination").is_some_and(Value::is_object);
        let pagination_absent = obj.get("pagination").map_or(true, Value::is_null);

        if has_meta && data_is_list && (pagination_is_object || pagination_absent) {
            let meta = obj.remove("metaData").unwrap_or(Value::Null);
            let data = take_array(&mut obj, "data");
            return match obj.remove("pagination") {
                Some(Value::Object(pagination)) => RawPayload::Canonical {
                    meta,
                    data,
                    pagination,
                },
                _ => RawPayload::MetaOnly { meta, data },
            };
        }

        let count_is_numeric = obj
            .get("pagination")
            .and_then(|p| p.get("count"))
            .and_then(as_count)
            .is_some();
        if !has_meta && data_is_list && count_is_numeric {
            if let Some(Value::Object(pagination)) = obj.remove("pagination") {
                let data = take_array(&mut obj, "data");
                return RawPayload::BarePaginated { data, pagination };
            }
        }

        let results_is_list = obj.get("results").is_some_and(Value::is_array);
        if let (true, Some(count)) = (results_is_list, obj.get("count").and_then(as_count)) {
            return RawPayload::OffsetList {
                results: take_array(&mut obj, "results"),
                count,
                next: obj.get("next").and_then(as_link),
                previous: obj.get("previous").and_then(as_link),
            };
        }

        RawPayload::Unrecognized(Value::Object(obj))
    }

    /// Short name of the recognized shape, for logging.
    pub fn shape(&self) -> &'static str {
        match self {
            RawPayload::Canonical { .. } => "canonical",
            RawPayload::MetaOnly { .. } => "meta-only",
            RawPayload::BarePaginated { .. } => "bare-paginated",
            RawPayload::OffsetList { .. } => "offset-list",
            RawPayload::Unrecognized(_) => "unrecognized",
        }
    }
}

fn take_array(obj: &mut Map<String, Value>, key: &str) -> Vec<Value> {
    match obj.remove(key) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

/// Reads a non-negative count, accepting integral floats such as `100.0`.
pub fn as_count(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
            .map(|f| f as u64)
    })
}

/// Reads a `next`/`previous` link; anything but a non-empty string is `None`.
pub fn as_link(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn canonical_wins_over_everything() {
        let payload = RawPayload::classify(json!({
            "metaData": {"status": "success"},
            "data": [1, 2],
            "pagination": {"count": 2},
            "results": [],
            "count": 0
        }));
        assert_eq!(payload.shape(), "canonical");
    }

    #[test]
    fn null_pagination_is_meta_only() {
        let payload = RawPayload::classify(json!({
            "metaData": {}, "data": [], "pagination": null
        }));
        assert_eq!(payload.shape(), "meta-only");
    }

    #[test]
    fn bare_pagination_needs_numeric_count() {
        let ok = RawPayload::classify(json!({"data": [], "pagination": {"count": 3}}));
        assert_eq!(ok.shape(), "bare-paginated");

        let falls_through = RawPayload::classify(json!({
            "data": [], "pagination": {"count": "3"}, "results": [{"id": 1}], "count": 1
        }));
        assert_eq!(falls_through.shape(), "offset-list");

        let unknown = RawPayload::classify(json!({"data": [], "pagination": {"count": "3"}}));
        assert_eq!(unknown.shape(), "unrecognized");
    }

    #[test]
    fn offset_list_reads_links() {
        let payload = RawPayload::classify(json!({
            "results": [{"id": 1}], "count": 10.0, "next": "http://x/?offset=1", "previous": null
        }));
        match payload {
            RawPayload::OffsetList {
                results,
                count,
                next,
                previous,
            } => {
                assert_eq!(results.len(), 1);
                assert_eq!(count, 10);
                assert_eq!(next.as_deref(), Some("http://x/?offset=1"));
                assert_eq!(previous, None);
            }
            other => panic!("unexpected shape {}", other.shape()),
        }
    }

    #[test]
    fn non_objects_are_unrecognized() {
        assert_eq!(RawPayload::classify(json!([1, 2, 3])).shape(), "unrecognized");
        assert_eq!(RawPayload::classify(json!("oops")).shape(), "unrecognized");
        assert_eq!(as_count(&json!(-1)), None);
    }
}

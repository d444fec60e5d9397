//! Caller-facing list filters and the limit/offset query sent to the backend.

use std::fmt;

use super::common::{PageRequest, Query};

/// A single filter value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => write!(f, "{}", s),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

/// Value of a filter field. `Null` and empty strings mean "not set".
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    Null,
    One(Scalar),
    Many(Vec<Scalar>),
}

macro_rules! filter_value_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FilterValue {
                fn from(value: $t) -> Self {
                    FilterValue::One(value.into())
                }
            }

            impl From<Option<$t>> for FilterValue {
                fn from(value: Option<$t>) -> Self {
                    match value {
                        Some(v) => FilterValue::One(v.into()),
                        None => FilterValue::Null,
                    }
                }
            }

            impl From<Vec<$t>> for FilterValue {
                fn from(values: Vec<$t>) -> Self {
                    FilterValue::Many(values.into_iter().map(Into::into).collect())
                }
            }
        )*
    };
}

filter_value_from!(&str, String, i64, i32, f64, bool, Scalar);

/// A field/value pair whose presence means "no filter" and is never sent,
/// e.g. `file_type=all`.
pub type Sentinel = (&'static str, &'static str);

/// List filter as built by a caller: arbitrary fields plus optional page/size.
///
/// Fields keep insertion order; setting a field twice replaces the first value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    /// Requested page (1-based). Validated by the normalizer.
    pub page: Option<i64>,
    /// Requested page length. Validated by the normalizer.
    pub size: Option<i64>,
    fields: Vec<(String, FilterValue)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets a field. `page` and `size` are routed to the pagination slots.
    pub fn with(mut self, field: &str, value: impl Into<FilterValue>) -> Self {
        self.set(field, value.into());
        self
    }

    pub fn with_search(self, search: &str) -> Self {
        self.with("search", search)
    }

    pub fn set(&mut self, field: &str, value: FilterValue) {
        let as_int = match &value {
            FilterValue::One(Scalar::Int(i)) => Some(*i),
            _ => None,
        };
        match field {
            "page" => self.page = as_int,
            "size" => self.size = as_int,
            _ => match self.fields.iter_mut().find(|(k, _)| k == field) {
                Some(slot) => slot.1 = value,
                None => self.fields.push((field.to_string(), value)),
            },
        }
    }

    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.fields.iter().find(|(k, _)| k == field).map(|(_, v)| v)
    }

    pub fn fields(&self) -> &[(String, FilterValue)] {
        &self.fields
    }

    /// Flattens the filter fields into query pairs, dropping unset values and
    /// any value matching a sentinel for its field.
    pub fn to_pairs(&self, sentinels: &[Sentinel]) -> Vec<(String, String)> {
        let is_sentinel = |field: &str, value: &str| {
            sentinels.iter().any(|(f, v)| *f == field && *v == value)
        };
        let mut pairs = Vec::new();
        for (field, value) in self.fields.iter() {
            let scalars: &[Scalar] = match value {
                FilterValue::Null => &[],
                FilterValue::One(s) => std::slice::from_ref(s),
                FilterValue::Many(many) => many.as_slice(),
            };
            for scalar in scalars {
                let rendered = scalar.to_string();
                if rendered.is_empty() || is_sentinel(field, &rendered) {
                    continue;
                }
                pairs.push((field.clone(), rendered));
            }
        }
        pairs
    }
}

/// The query actually sent to a list endpoint: filter pairs plus `limit`/`offset`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery {
    pub pairs: Vec<(String, String)>,
    pub page: PageRequest,
}

impl ListQuery {
    pub fn new(filter: &Filter, sentinels: &[Sentinel], page: PageRequest) -> Self {
        Self {
            pairs: filter.to_pairs(sentinels),
            page,
        }
    }
}

impl Query for ListQuery {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self.pairs.clone();
        pairs.push(("limit".to_string(), self.page.limit().to_string()));
        pairs.push(("offset".to_string(), self.page.offset().to_string()));
        pairs
    }
}

//! Shared query infrastructure: the [`Query`] trait and [`PageRequest`].

use url::{form_urlencoded, Url};

/// Trait implemented by everything that can be sent as a query string.
pub trait Query {
    /// Returns the `key=value` pairs of this query, in order. Multi-valued
    /// fields appear once per value.
    fn query_pairs(&self) -> Vec<(String, String)>;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }

    /// Serializes the query as a form-urlencoded string without a leading `?`.
    fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }
}

/// A validated page request: 1-based page number and a positive page length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    /// Builds a request, bumping zero values up to 1.
    ///
    /// `page` is capped so that `offset()` always fits in a `u64`.
    pub fn new(page: u64, size: u64) -> Self {
        let size = size.max(1);
        Self {
            page: page.clamp(1, (u64::MAX / size).saturating_add(1)),
            size,
        }
    }

    /// Number of rows to fetch.
    pub fn limit(&self) -> u64 {
        self.size
    }

    /// Number of rows to skip: `(page - 1) * size`.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_exact() {
        assert_eq!(PageRequest::new(1, 12).offset(), 0);
        assert_eq!(PageRequest::new(2, 24).offset(), 24);
        assert_eq!(PageRequest::new(5, 48).offset(), 192);
        assert_eq!(PageRequest::new(3, 36).limit(), 36);
    }

    #[test]
    fn zero_values_are_clamped() {
        let req = PageRequest::new(0, 0);
        assert_eq!(req, PageRequest { page: 1, size: 1 });
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn huge_page_keeps_offset_in_range() {
        let req = PageRequest::new(u64::MAX, 48);
        assert_eq!(req.page, u64::MAX / 48 + 1);
        assert!(req.offset() <= u64::MAX - 47);

        let single = PageRequest::new(u64::MAX, 1);
        assert_eq!(single.offset(), u64::MAX - 1);
    }
}

//! List-fetch normalization.
//!
//! Every list endpoint of the backend answers in one of several historical
//! shapes and pages either by page/size or by limit/offset. [`fetch_page`]
//! is the single translation point: callers hand it a [`Filter`] in
//! page/size terms, the transport only ever sees `limit`/`offset`, and the
//! answer always comes back as an [`Envelope`] with a complete
//! [`PaginationState`]. Failures are folded into error envelopes rather than
//! returned as `Err`.

use std::future::Future;

use panel_api::types::{
    as_count, as_link, Envelope, Identified, MetaData, PaginationState, RawPayload, RecordId,
};
use panel_api::{Error, Filter, ListQuery, PageRequest, Query};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::resources::PageRules;

/// Message used when an error carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Page length of the list request issued by the single-entity fallback.
pub const FALLBACK_SCAN_SIZE: u64 = 100;

const LIST_OK_MESSAGE: &str = "Fetched successfully";

/// Resolves the effective page and page length for a filter.
///
/// A size outside `valid_page_sizes` (or absent) becomes `default_size`; a
/// page below 1 (or absent) becomes 1.
pub fn normalize_page(
    filter: &Filter,
    valid_page_sizes: &[u64],
    default_size: u64,
) -> PageRequest {
    let size = filter
        .size
        .and_then(|s| u64::try_from(s).ok())
        .filter(|s| valid_page_sizes.contains(s))
        .unwrap_or(default_size);
    let page = filter
        .page
        .and_then(|p| u64::try_from(p).ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1);
    PageRequest::new(page, size)
}

/// Fetches one page of a list resource and returns it in canonical form.
///
/// `endpoint_fn` receives the finished query string (filters, then `limit`
/// and `offset`) and performs the network call. Whatever it returns is
/// reconciled into an envelope; an `Err` becomes an error envelope with an
/// empty list and zero-result pagination at the requested page.
pub async fn fetch_page<T, F, Fut>(
    filter: &Filter,
    rules: &PageRules<'_>,
    endpoint_fn: F,
) -> Envelope<Vec<T>>
where
    T: DeserializeOwned,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<Value, Error>>,
{
    let page = normalize_page(filter, rules.valid_page_sizes, rules.default_size);
    let query = ListQuery::new(filter, rules.sentinels, page).to_query_string();
    tracing::debug!("list query: {}", query);

    match endpoint_fn(query).await {
        Ok(raw) => reconcile(RawPayload::classify(raw), page),
        Err(err) => list_error_envelope(&err, page),
    }
}

/// Pagination fields as far as the payload reported them.
#[derive(Clone, Debug, Default, PartialEq)]
struct PartialPagination {
    count: Option<u64>,
    next: Option<String>,
    previous: Option<String>,
    page_size: Option<u64>,
    current_page: Option<u64>,
    total_pages: Option<u64>,
}

impl PartialPagination {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            count: map.get("count").and_then(as_count),
            next: map.get("next").and_then(as_link),
            previous: map.get("previous").and_then(as_link),
            page_size: map.get("page_size").and_then(as_count),
            current_page: map.get("current_page").and_then(as_count),
            total_pages: map.get("total_pages").and_then(as_count),
        }
    }

    fn unrecognized(page: PageRequest) -> Self {
        Self {
            count: Some(0),
            page_size: Some(page.size),
            current_page: Some(1),
            total_pages: Some(0),
            ..Self::default()
        }
    }

    /// Fills whatever is still missing from the requested page.
    fn repair(self, page: PageRequest) -> PaginationState {
        let count = self.count.unwrap_or(0);
        let page_size = self.page_size.filter(|s| *s > 0).unwrap_or(page.size);
        let current_page = self.current_page.filter(|c| *c >= 1).unwrap_or(page.page);
        let total_pages = match self.total_pages {
            Some(total) if total > 0 => total,
            _ if count > 0 => count.div_ceil(page_size),
            _ => 0,
        };
        PaginationState {
            count,
            next: self.next,
            previous: self.previous,
            page_size,
            current_page,
            total_pages,
        }
    }
}

/// Maps a classified payload onto the canonical envelope.
pub fn reconcile<T: DeserializeOwned>(payload: RawPayload, page: PageRequest) -> Envelope<Vec<T>> {
    let shape = payload.shape();
    let (meta, items, partial) = match payload {
        RawPayload::Canonical {
            meta,
            data,
            pagination,
        } => {
            // count and links are trusted, page geometry follows the request
            let partial = PartialPagination {
                page_size: Some(page.size),
                current_page: Some(page.page),
                total_pages: None,
                ..PartialPagination::from_map(&pagination)
            };
            (Some(meta), data, partial)
        }
        RawPayload::MetaOnly { meta, data } => {
            // no way to know the real total: the slice is taken as the whole set
            let n = data.len() as u64;
            let partial = PartialPagination {
                count: Some(n),
                page_size: Some(n),
                current_page: Some(1),
                total_pages: Some(1),
                ..PartialPagination::default()
            };
            (Some(meta), data, partial)
        }
        RawPayload::BarePaginated { data, pagination } => {
            (None, data, PartialPagination::from_map(&pagination))
        }
        RawPayload::OffsetList {
            results,
            count,
            next,
            previous,
        } => {
            let partial = PartialPagination {
                count: Some(count),
                next,
                previous,
                page_size: Some(page.size),
                current_page: Some(page.page),
                total_pages: Some(count.div_ceil(page.size)),
            };
            (None, results, partial)
        }
        RawPayload::Unrecognized(_) => {
            tracing::warn!("Unrecognized list payload, returning an empty page");
            (None, Vec::new(), PartialPagination::unrecognized(page))
        }
    };

    let data = match serde_json::from_value::<Vec<T>>(Value::Array(items)) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(
                "List items of {} payload did not match the expected type: {}",
                shape,
                e
            );
            return Envelope::new(
                MetaData::success(LIST_OK_MESSAGE),
                Vec::new(),
                Some(PartialPagination::unrecognized(page).repair(page)),
            );
        }
    };

    Envelope::new(
        meta_or_success(meta, LIST_OK_MESSAGE),
        data,
        Some(partial.repair(page)),
    )
}

fn meta_or_success(meta: Option<Value>, message: &str) -> MetaData {
    meta.and_then(|m| serde_json::from_value::<MetaData>(m).ok())
        .unwrap_or_else(|| MetaData::success(message))
}

/// Text shown for a failed call: the backend's message, else the error's
/// own description, else [`FALLBACK_MESSAGE`].
pub fn error_message(err: &Error) -> String {
    if let Some(message) = err.api_message() {
        return message.to_string();
    }
    let described = err.to_string();
    if described.trim().is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        described
    }
}

/// Status reported for a failed call; 500 when the server never answered.
pub fn error_status(err: &Error) -> u16 {
    err.status_code().unwrap_or(500)
}

pub fn list_error_envelope<T>(err: &Error, page: PageRequest) -> Envelope<Vec<T>> {
    Envelope::new(
        MetaData::error(&error_message(err), error_status(err)),
        Vec::new(),
        Some(PaginationState::empty(page.page, page.size)),
    )
}

pub fn entity_error_envelope<T>(err: &Error) -> Envelope<Option<T>> {
    Envelope::new(
        MetaData::error(&error_message(err), error_status(err)),
        None,
        None,
    )
}

/// Interprets a single-entity response body.
///
/// Accepts either `{metaData, data}` or the bare entity. A `null` entity
/// (e.g. an empty 204 body) yields `data: None`.
pub fn entity_envelope<T: DeserializeOwned>(
    raw: Value,
    message: &str,
) -> Result<Envelope<Option<T>>, Error> {
    let (meta, entity) = match raw {
        Value::Object(mut obj) if obj.contains_key("metaData") && obj.contains_key("data") => {
            let meta = obj.remove("metaData");
            (meta, obj.remove("data").unwrap_or(Value::Null))
        }
        other => (None, other),
    };
    let data = if entity.is_null() {
        None
    } else {
        Some(serde_json::from_value::<T>(entity).map_err(|e| Error::Parse(e.to_string()))?)
    };
    Ok(Envelope::new(meta_or_success(meta, message), data, None))
}

/// Fetches one entity by id, falling back to a scan of the first list page.
///
/// `detail_fn` performs the direct "get by id" call. If it fails (or its body
/// cannot be read as `T`), `list_fn` is called once with a page-1,
/// [`FALLBACK_SCAN_SIZE`]-row query and the rows are searched for `id`. A
/// hit becomes a success envelope; a miss, or a failing list call, returns
/// the original error untouched.
pub async fn fetch_details<T, D, DFut, L, LFut>(
    id: RecordId,
    detail_fn: D,
    list_fn: L,
) -> Result<Envelope<Option<T>>, Error>
where
    T: DeserializeOwned + Identified,
    D: FnOnce() -> DFut,
    DFut: Future<Output = Result<Value, Error>>,
    L: FnOnce(String) -> LFut,
    LFut: Future<Output = Result<Value, Error>>,
{
    let original = match detail_fn().await {
        Ok(raw) => match entity_envelope::<T>(raw, LIST_OK_MESSAGE) {
            Ok(envelope) if envelope.data.is_some() => return Ok(envelope),
            Ok(_) => Error::Parse(format!("empty body for id {}", id)),
            Err(err) => err,
        },
        Err(err) => err,
    };

    tracing::warn!("Direct lookup of id {} failed ({}), scanning list", id, original);
    let page = PageRequest::new(1, FALLBACK_SCAN_SIZE);
    let query = ListQuery::new(&Filter::new(), &[], page).to_query_string();
    let raw = match list_fn(query).await {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!("Fallback list scan for id {} failed: {}", id, err);
            return Err(original);
        }
    };

    let listed: Envelope<Vec<T>> = reconcile(RawPayload::classify(raw), page);
    match listed.data.into_iter().find(|item| item.id() == id) {
        Some(item) => Ok(Envelope::new(
            MetaData::success(LIST_OK_MESSAGE),
            Some(item),
            None,
        )),
        None => Err(original),
    }
}

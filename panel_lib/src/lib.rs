//! Library layer for the estate panel: list normalization, resource catalog,
//! and a facade client that never surfaces transport errors to callers.
//!
//! Wraps the `panel_api` transport crate with page/size normalization,
//! response-shape reconciliation, a single-entity fallback, and mutation
//! notices.

pub mod client;
pub mod config;
pub mod error;
pub mod normalize;
pub mod notify;
pub mod resources;
pub mod selection;
pub mod validation;

pub use panel_api;
pub use panel_api::types;
pub use panel_api::{Filter, FilterValue, PageRequest, Query, Scalar};

pub use client::PanelClient;
pub use config::PanelConfig;
pub use error::PanelError;
pub use notify::{NoopNotifier, Notifier, TracingNotifier};
pub use resources::{PageRules, ResourceSpec};
pub use selection::Selection;

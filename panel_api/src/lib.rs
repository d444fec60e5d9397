mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::query::{Filter, FilterValue, ListQuery, PageRequest, Query, Scalar, Sentinel};

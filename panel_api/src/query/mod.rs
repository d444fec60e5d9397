mod common;
pub use self::common::{PageRequest, Query};

mod filter;
pub use self::filter::{Filter, FilterValue, ListQuery, Scalar, Sentinel};

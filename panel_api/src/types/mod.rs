mod meta;
pub use self::meta::{Envelope, MetaData, PaginationState, Status};

mod payload;
pub use self::payload::{as_count, as_link, RawPayload};

mod record;
pub use self::record::{Identified, Record, RecordId};

mod media;
pub use self::media::{FileType, MediaItem};

mod admin;
pub use self::admin::{AdminUser, Role};

mod listing;
pub use self::listing::{Agency, Agent, Property};

mod content;
pub use self::content::{Blog, Portfolio, Ticket};

pub mod client;
pub mod error;
pub mod normalize;
pub mod search;
pub mod types;

pub use client::EventbriteClient;
pub use error::{EventbriteError, SearchWarning};
pub use normalize::{normalize_event, normalize_events};
pub use search::RegionSearch;
pub use types::{RawEvent, SearchPage};

pub mod session;
pub mod stats;

pub use session::{EditableField, SessionRecord, Updates, parse_updates};
pub use stats::{ActivityStats, Statistics};

pub mod aggregator;
pub mod extractor;
pub mod tokens;
pub mod types;

pub use aggregator::aggregate;
pub use extractor::{dedup_by_name, extract};
pub use types::{PlayerTotal, SectionRecord, SectionStandings};

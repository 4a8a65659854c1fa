pub mod aggregator;
pub mod query;
pub mod types;

pub use aggregator::StatsBook;
pub use query::{
    apply_action, run_query, FilterAction, FilterState, PageView, SortOrder, StatMode,
    DEFAULT_PAGE_SIZE,
};
pub use types::{AggregateKey, MatchEntry, PlayerAggregate, SortColumn, StatLine};

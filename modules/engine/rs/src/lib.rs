pub use bytes::ByteSearch;
pub use compare::Compare;
pub use count::{Count, CountPolicy};
pub use rearrange::{concat, join, PartitionPolicy, Rearrange, SortOrder};
pub use reduce::{Reduce, Reducible};
pub use search::Search;
pub use trim::{Trim, TrimSide, TrimTest};

mod bytes;
mod compare;
mod count;
mod rearrange;
mod reduce;
mod search;
mod trim;

mod drop_table;

pub use drop_table::{DropResolver, ResolvedDrop, TieredDropResolver};

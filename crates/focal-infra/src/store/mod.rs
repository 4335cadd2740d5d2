//! Flat-file record stores - one JSON array file per entity type.

mod json_table;
mod posts;
mod users;

pub use json_table::JsonTable;
pub use posts::JsonPostStore;
pub use users::JsonUserStore;

//! Domain entities and framing policy.

mod user;

mod post;

pub mod framing;

pub use post::Post;
pub use user::{Profile, User};

pub mod cache;
pub mod source;

pub use cache::{CachedSource, DirSource};
pub use source::{HttpSource, PageSource};

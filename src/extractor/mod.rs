//! HTML-level helpers shared by discovery and aggregation.

pub mod block;
pub mod links;
pub mod text;

pub use block::is_blocked;
pub use links::extract_links;
pub use text::visible_text;

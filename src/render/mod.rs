//! Markdown generation for per-problem pages.

pub mod badges;
pub mod page;

pub use badges::{Sentiment, difficulty_badge, difficulty_color, tag_badges, tag_color};
pub use page::{PageRenderer, code_tabs, complexity_block, display_title, render_header};

// Render module split into focused submodules to reduce file size and compiler warnings.

pub mod cards;
pub mod detail;
pub mod full;
pub mod modeline;
pub mod query;
pub mod styles;
pub mod util;

pub use cards::{notice_line, render_cards_content, render_main_content};
pub use detail::render_detail_block;
pub use full::render_full;
pub use modeline::{render_modeline, render_modeline_padded};
pub use query::render_query_block;

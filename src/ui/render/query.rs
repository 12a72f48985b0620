use crate::ui::model::{Model, DEFAULT_WIDTH, QUERY_BLOCK_LINES};
use crate::ui::render::styles::{STYLE_MODE_TAG, STYLE_QUERY, STYLE_QUERY_BOX};

// Bordered input box showing the active search mode and the typed query.
pub fn render_query_block(m: &Model) -> Vec<String> {
    let tag = STYLE_MODE_TAG.render(&format!("[{}]", m.mode.label()));
    let typed = STYLE_QUERY.render(&m.query);
    let cursor = if m.detail_open { "" } else { "▌" };
    let inner = format!("{tag} {typed}{cursor}");
    let box_width = if m.screen_width >= 2 {
        m.screen_width - 2
    } else {
        DEFAULT_WIDTH
    };
    let w_i32: i32 = box_width.try_into().unwrap_or(i32::MAX);
    let query_block = STYLE_QUERY_BOX.clone().width(w_i32).render(&inner);
    let mut out: Vec<String> = query_block.lines().map(|s| s.to_string()).collect();
    // The box must occupy exactly QUERY_BLOCK_LINES lines; truncate or pad with empty lines.
    out.truncate(QUERY_BLOCK_LINES);
    while out.len() < QUERY_BLOCK_LINES {
        out.push(String::new());
    }
    out
}

use crate::cocktail::{count_header, Cocktail};
use crate::ui::model::{Model, Notice, NoticeLevel, DEFAULT_WIDTH};
use crate::ui::render::styles::{
    STYLE_DESC, STYLE_HEADER, STYLE_LINENUM, STYLE_LOADING, STYLE_NAME, STYLE_NOTICE_DANGER,
    STYLE_NOTICE_INFO, STYLE_NOTICE_WARNING, STYLE_SELECTED,
};
use crate::ui::render::util::normalize_and_pad;

fn compute_gutter_width(total: usize) -> usize {
    if total == 0 {
        return 1;
    }
    let gw = ((total as f64).log10().floor() as usize) + 1;
    usize::max(gw, 3)
}

fn format_num_str(num: usize, gutter_width: usize) -> String {
    format!("{:>1$} │ ", num, gutter_width)
}

pub fn notice_line(notice: &Notice) -> String {
    match notice.level {
        NoticeLevel::Warning => STYLE_NOTICE_WARNING.render(&format!("! {}", notice.message)),
        NoticeLevel::Info => STYLE_NOTICE_INFO.render(&format!("i {}", notice.message)),
        NoticeLevel::Danger => STYLE_NOTICE_DANGER.render(&format!("✗ {}", notice.message)),
    }
}

// One card: a name/category line plus a faint image-URL line.
fn render_card_lines(
    c: &Cocktail,
    num_str: String,
    selected: bool,
    gutter_width: usize,
) -> Vec<String> {
    let name = if selected {
        STYLE_SELECTED.render(&c.name)
    } else {
        STYLE_NAME.render(&c.name)
    };
    let first = format!(
        "{}{}{}",
        STYLE_LINENUM.render(&num_str),
        name,
        STYLE_DESC.render(&format!("  {}", c.category))
    );
    let indent = " ".repeat(gutter_width + 3);
    let second = format!("{indent}{}", STYLE_DESC.render(c.image_url()));
    vec![first, second]
}

// Count header plus the cards of the current page, in response order.
pub fn render_cards_content(m: &Model) -> String {
    if m.results.is_empty() {
        return String::new();
    }
    let total = m.results.len();
    let per = if m.per_page == 0 { total } else { m.per_page };
    let start = m.page.saturating_mul(per);
    let end = usize::min(start + per, total);
    let gutter_width = compute_gutter_width(total);

    let mut lines: Vec<String> = vec![STYLE_HEADER.render(&count_header(total))];
    for (idx, c) in m
        .results
        .iter()
        .enumerate()
        .skip(start)
        .take(end.saturating_sub(start))
    {
        let num_str = format_num_str(idx + 1, gutter_width);
        lines.extend(render_card_lines(c, num_str, idx == m.selected, gutter_width));
    }
    lines.join("\n")
}

pub fn render_main_content(m: &Model) -> String {
    let total_width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };

    let lines: Vec<String> = if m.detail_open {
        m.render_detail_block()
    } else if m.loading {
        vec![STYLE_LOADING.render("Searching…")]
    } else if let Some(notice) = &m.notice {
        vec![
            notice_line(notice),
            STYLE_DESC.render("esc to dismiss"),
        ]
    } else if m.results.is_empty() {
        vec![STYLE_DESC.render("Type a query and press Enter to search")]
    } else {
        m.render_cards_content()
            .lines()
            .map(str::to_string)
            .collect()
    };

    let rows = if m.content_height == 0 {
        lines.len()
    } else {
        m.content_height
    };
    // Return exactly `rows` lines each normalized to the terminal width.
    normalize_and_pad(lines, total_width, rows)
}

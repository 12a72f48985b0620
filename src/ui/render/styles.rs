use lipgloss::{rounded_border, Color, Style};
use once_cell::sync::Lazy;

// Styles kept local to render module
pub static STYLE_HEADER: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(0, 238, 238))
        .bold(true)
});
pub static STYLE_NAME: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(230, 230, 230)).bold(true));
pub static STYLE_SELECTED: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
});
pub static STYLE_DESC: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_LINENUM: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_LOADING: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(0, 238, 238))
        .bold(true)
});
pub static STYLE_NOTICE_WARNING: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(238, 200, 0))
        .bold(true)
});
pub static STYLE_NOTICE_INFO: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(0, 150, 238)));
pub static STYLE_NOTICE_DANGER: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(238, 0, 0))
        .bold(true)
});
pub static STYLE_QUERY: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(0, 0, 238))
        .bold(true)
});
pub static STYLE_MODE_TAG: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
});
pub static STYLE_MODELINE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(95, 95, 95))
        .foreground(Color::from_rgb(255, 255, 255))
        .padding(0, 1, 0, 1)
});
pub static STYLE_QUERY_BOX: Lazy<Style> =
    Lazy::new(|| Style::new().border(rounded_border()).padding(0, 1, 0, 1));

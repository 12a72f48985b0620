use lipgloss::Style;

// Normalize a block of rendered lines to an exact width and line count.
// Over-long lines are clipped, never wrapped, so every input line stays a
// single physical line.
pub fn normalize_and_pad(lines: Vec<String>, total_width: usize, rows: usize) -> String {
    let clip_style = Style::new().max_width(total_width as i32);
    let line_style = Style::new().width(total_width as i32);
    let mut normalized: Vec<String> = lines
        .into_iter()
        .map(|l| line_style.render(&clip_style.render(&l)))
        .collect();
    if normalized.len() > rows {
        normalized.truncate(rows);
    } else {
        while normalized.len() < rows {
            normalized.push(line_style.render(""));
        }
    }
    normalized.join("\n")
}

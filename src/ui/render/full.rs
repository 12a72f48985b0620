use crate::ui::model::Model;

pub fn render_full(m: &Model) -> String {
    let mut lines = m.render_query_block();
    lines.extend(m.render_main_content().lines().map(str::to_string));
    let first_line = crate::ui::render::modeline::render_modeline_padded(m)
        .lines()
        .next()
        .unwrap_or("")
        .to_string();
    lines.push(first_line);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use crate::cocktail::Cocktail;
    use regex::Regex;

    // helper to strip ANSI CSI sequences from rendered output for assertions
    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    fn results(n: usize) -> Vec<Cocktail> {
        (0..n)
            .map(|i| Cocktail {
                name: format!("Drink{}", i + 1),
                category: "Cocktail".to_string(),
                glass: "Coupe".to_string(),
                alcoholic: "Alcoholic".to_string(),
                instructions: "Stir gently.".to_string(),
                image: String::new(),
                ingredients: vec![],
            })
            .collect()
    }

    #[test]
    fn render_full_matches_dimensions() {
        // sample sizes to validate behavior across different terminal shapes
        let sizes = [(80usize, 24usize), (100usize, 10usize), (40usize, 20usize)];

        for (w, h) in sizes.iter().cloned() {
            let mut m = crate::ui::initial_model("");
            m.update(crate::ui::Msg::WindowSize {
                width: w,
                height: h,
            });
            // populate enough results so the pagination logic is exercised
            m.update(crate::ui::Msg::SearchFinished(Ok(results(50))));

            let out = m.render_full();
            let stripped = strip_ansi(&out);

            let lines: Vec<&str> = stripped.lines().collect();
            assert_eq!(
                lines.len(),
                h,
                "height mismatch for {}x{}: got {} lines\n<<output>>\n{}",
                w,
                h,
                lines.len(),
                stripped
            );

            // each line must have exactly `w` characters after stripping ANSI
            for (idx, line) in lines.iter().enumerate() {
                let lw = line.chars().count();
                assert_eq!(
                    lw, w,
                    "width mismatch at line {idx} for {w}x{h}: got {lw} chars\nline: `{line}`\n<<output>>\n{stripped}"
                );
            }
        }
    }

    #[test]
    fn modeline_is_last_line_and_exact_width() {
        let (w, h) = (80usize, 24usize);
        let mut m = crate::ui::initial_model("");
        m.update(crate::ui::Msg::WindowSize {
            width: w,
            height: h,
        });
        let out = m.render_full();
        let stripped = strip_ansi(&out);
        let lines: Vec<&str> = stripped.lines().collect();
        assert!(!lines.is_empty(), "no lines rendered");
        let last = *lines.last().unwrap();
        assert_eq!(
            last.chars().count(),
            w,
            "modeline width mismatch: got {} expected {}\n<<output>>\n{}",
            last.chars().count(),
            w,
            stripped
        );
        let modeline = crate::ui::render_modeline_padded(&m);
        let modeline_stripped = strip_ansi(&modeline);
        let modeline_first = modeline_stripped.lines().next().unwrap_or("");
        assert_eq!(
            last, modeline_first,
            "modeline content mismatch:\n<<output>>\n{stripped}"
        );
    }

    #[test]
    fn query_box_is_first_three_lines() {
        let (w, h) = (80usize, 24usize);
        let mut m = crate::ui::initial_model("");
        m.update(crate::ui::Msg::WindowSize {
            width: w,
            height: h,
        });
        let out = m.render_full();
        let stripped = strip_ansi(&out);
        let lines: Vec<&str> = stripped.lines().collect();
        assert!(lines.len() >= 3, "not enough lines to contain the query box");
        let query_block = m.render_query_block();
        let helper_combined = query_block.join("\n");
        let helper_stripped = strip_ansi(&helper_combined);
        let helper_lines: Vec<&str> = helper_stripped.lines().collect();
        for i in 0..3 {
            assert_eq!(
                lines[i], helper_lines[i],
                "query box line {i} mismatch:\n<<output>>\n{stripped}"
            );
        }
    }

    #[test]
    fn detail_overlay_replaces_card_list_in_full_render() {
        let (w, h) = (80usize, 24usize);
        let mut m = crate::ui::initial_model("");
        m.update(crate::ui::Msg::WindowSize {
            width: w,
            height: h,
        });
        m.update(crate::ui::Msg::SearchFinished(Ok(results(3))));
        let listed = strip_ansi(&m.render_full());
        assert!(listed.contains("Found 3 cocktails:"));

        m.update(crate::ui::Msg::KeyRight);
        let overlay = strip_ansi(&m.render_full());
        assert!(!overlay.contains("Found 3 cocktails:"));
        assert!(overlay.contains("Ingredients"));
        assert!(overlay.contains("Instructions"));
        assert!(overlay.contains("Stir gently."));

        // dimensions hold with the overlay open too
        let lines: Vec<&str> = overlay.lines().collect();
        assert_eq!(lines.len(), h);
        for line in &lines {
            assert_eq!(line.chars().count(), w);
        }
    }
}

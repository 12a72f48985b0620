use crate::ui::model::Model;
use crate::ui::render::styles::{STYLE_DESC, STYLE_HEADER, STYLE_NAME};

// Recipe overlay for the selected record; replaces the card list while open.
pub fn render_detail_block(m: &Model) -> Vec<String> {
    let c = match m.selected_cocktail() {
        Some(c) => c,
        None => return vec![],
    };
    let mut lines: Vec<String> = vec![
        STYLE_NAME.render(&c.name),
        STYLE_DESC.render(c.image_url()),
        format!(
            "{} {}   {} {}   {}",
            STYLE_DESC.render("Category:"),
            c.category,
            STYLE_DESC.render("Glass:"),
            c.glass,
            c.alcoholic
        ),
        String::new(),
        STYLE_HEADER.render("Ingredients"),
    ];
    for ing in &c.ingredients {
        lines.push(format!("- {}", ing.line()));
    }
    lines.push(String::new());
    lines.push(STYLE_HEADER.render("Instructions"));
    lines.extend(c.instructions.lines().map(str::to_string));
    lines.push(String::new());
    lines.push(STYLE_DESC.render("esc to close"));
    lines
}

#[cfg(test)]
mod tests {
    use crate::cocktail::{Cocktail, Ingredient, PLACEHOLDER_IMAGE};
    use crate::ui::model::initial_model;
    use regex::Regex;

    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    fn margarita() -> Cocktail {
        Cocktail {
            name: "Margarita".to_string(),
            category: "Ordinary Drink".to_string(),
            glass: "Cocktail glass".to_string(),
            alcoholic: "Alcoholic".to_string(),
            instructions: "Rub rim with lime.\nShake with ice.".to_string(),
            image: String::new(),
            ingredients: vec![
                Ingredient {
                    ingredient: "Tequila".to_string(),
                    measure: "1 1/2 oz".to_string(),
                },
                Ingredient {
                    ingredient: "Salt".to_string(),
                    measure: String::new(),
                },
            ],
        }
    }

    #[test]
    fn detail_block_shows_every_recipe_slot() {
        let mut m = initial_model("");
        m.results = vec![margarita()];
        m.detail_open = true;
        let out = strip_ansi(&m.render_detail_block().join("\n"));
        assert!(out.contains("Margarita"));
        assert!(out.contains(PLACEHOLDER_IMAGE), "placeholder image in overlay");
        assert!(out.contains("Category: Ordinary Drink"));
        assert!(out.contains("Glass: Cocktail glass"));
        assert!(out.contains("Alcoholic"));
        assert!(out.contains("Rub rim with lime."));
        assert!(out.contains("Shake with ice."));
    }

    #[test]
    fn ingredient_lines_format_measure_prefix() {
        let mut m = initial_model("");
        m.results = vec![margarita()];
        m.detail_open = true;
        let out = strip_ansi(&m.render_detail_block().join("\n"));
        assert!(out.contains("- 1 1/2 oz Tequila"));
        // measure absent: bare name, no leading separator
        assert!(out.contains("- Salt"));
        assert!(!out.contains("-  Salt"));
    }

    #[test]
    fn detail_block_is_empty_without_a_selection() {
        let m = initial_model("");
        assert!(m.render_detail_block().is_empty());
    }
}

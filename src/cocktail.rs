use serde::{Deserialize, Serialize};

// Shown wherever a record carries no image URL of its own.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Name,
    Ingredient,
    Category,
}

impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::Name
    }
}

impl SearchMode {
    pub fn parse(s: &str) -> Option<SearchMode> {
        match s.trim().to_lowercase().as_str() {
            "name" => Some(SearchMode::Name),
            "ingredient" => Some(SearchMode::Ingredient),
            "category" => Some(SearchMode::Category),
            _ => None,
        }
    }

    // Tab order in the UI: name -> ingredient -> category -> name
    pub fn next(self) -> SearchMode {
        match self {
            SearchMode::Name => SearchMode::Ingredient,
            SearchMode::Ingredient => SearchMode::Category,
            SearchMode::Category => SearchMode::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchMode::Name => "name",
            SearchMode::Ingredient => "ingredient",
            SearchMode::Category => "category",
        }
    }
}

// Wire form of one search: {"type": "...", "query": "..."}
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    #[serde(rename = "type")]
    pub mode: SearchMode,
    pub query: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub ingredient: String,
    #[serde(default)]
    pub measure: String,
}

impl Ingredient {
    // "<measure> <ingredient>", measure omitted when absent (no leading separator)
    pub fn line(&self) -> String {
        let measure = self.measure.trim();
        if measure.is_empty() {
            self.ingredient.clone()
        } else {
            format!("{} {}", measure, self.ingredient)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cocktail {
    pub name: String,
    pub category: String,
    pub glass: String,
    pub alcoholic: String,
    pub instructions: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Cocktail {
    pub fn image_url(&self) -> &str {
        if self.image.trim().is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.image
        }
    }

    // Plain-text recipe used by the non-interactive runner.
    pub fn recipe_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Name: {}\n", self.name));
        out.push_str(&format!("Category: {}\n", self.category));
        out.push_str(&format!("Glass: {}\n", self.glass));
        out.push_str(&format!("Alcoholic: {}\n", self.alcoholic));
        out.push_str("\nIngredients:\n");
        for ing in &self.ingredients {
            out.push_str(&format!("- {}\n", ing.line()));
        }
        out.push_str("\nInstructions:\n");
        out.push_str(&self.instructions);
        out.push('\n');
        if !self.image.trim().is_empty() {
            out.push_str(&format!("\nImage: {}\n", self.image));
        }
        out
    }
}

// Count header with singular/plural agreement.
pub fn count_header(n: usize) -> String {
    if n == 1 {
        "Found 1 cocktail:".to_string()
    } else {
        format!("Found {n} cocktails:")
    }
}

use crate::api;
use crate::cocktail::{count_header, Cocktail, SearchMode, SearchRequest};

// Non-interactive path: one search, plain stdout, no TUI.
pub async fn run_once(endpoint: &str, mode: SearchMode, query: &str) -> Result<String, String> {
    let query = query.trim();
    if query.is_empty() {
        return Err("Search query cannot be empty".to_string());
    }
    let req = SearchRequest {
        mode,
        query: query.to_string(),
    };
    let results = api::search(endpoint, &req).await?;
    Ok(format_results(query, &results))
}

pub fn format_results(query: &str, results: &[Cocktail]) -> String {
    if results.is_empty() {
        return format!("No cocktails found matching '{query}'.");
    }
    let mut out = String::new();
    out.push_str(&count_header(results.len()));
    out.push('\n');
    for (i, c) in results.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, c.name));
    }
    // a unique match prints its full recipe directly
    if let [only] = results {
        out.push('\n');
        out.push_str(&only.recipe_text());
    }
    out
}

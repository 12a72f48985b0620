use crate::cocktail::{Cocktail, SearchRequest};
use crate::ui::model::{Model, NoticeLevel, CARD_LINES, HEADER_LINES, RESERVED_LINES};

pub fn handle_update(m: &mut Model, msg: crate::ui::Msg) {
    match msg {
        crate::ui::Msg::WindowSize { width, height } => handle_window_size(m, width, height),
        crate::ui::Msg::Rune(r) => handle_rune(m, r),
        crate::ui::Msg::KeyBackspace => handle_key_backspace(m),
        crate::ui::Msg::KeyEnter => handle_key_enter(m),
        crate::ui::Msg::KeyEsc => handle_key_esc(m),
        crate::ui::Msg::KeyTab => handle_key_tab(m),
        crate::ui::Msg::KeyUp => handle_key_up(m),
        crate::ui::Msg::KeyDown => handle_key_down(m),
        crate::ui::Msg::KeyRight => handle_key_right(m),
        crate::ui::Msg::SearchFinished(outcome) => handle_search_finished(m, outcome),
    }
}

fn handle_window_size(m: &mut Model, width: usize, height: usize) {
    m.screen_width = width;
    m.content_height = height.saturating_sub(RESERVED_LINES);
    m.per_page = (m.content_height.saturating_sub(HEADER_LINES) / CARD_LINES).max(1);
    // re-derive the page so the selection stays on the visible page
    follow_selection(m);
}

fn handle_rune(m: &mut Model, r: char) {
    if m.detail_open {
        return;
    }
    // editing the query dismisses any notice
    m.notice = None;
    m.query.push(r);
}

fn handle_key_backspace(m: &mut Model) {
    if m.detail_open {
        return;
    }
    m.notice = None;
    m.query.pop();
}

// Enter performs the search; inside the overlay it closes it instead.
fn handle_key_enter(m: &mut Model) {
    if m.detail_open {
        m.detail_open = false;
        return;
    }
    perform_search(m);
}

fn perform_search(m: &mut Model) {
    let query = m.query.trim();
    if query.is_empty() {
        m.show_notice(NoticeLevel::Warning, "Please enter a search term");
        return;
    }
    // loading is visible until the matching SearchFinished arrives
    m.loading = true;
    m.notice = None;
    m.results.clear();
    m.selected = 0;
    m.page = 0;
    m.detail_open = false;
    m.pending_request = Some(SearchRequest {
        mode: m.mode,
        query: query.to_string(),
    });
}

fn handle_key_esc(m: &mut Model) {
    if m.detail_open {
        m.detail_open = false;
        return;
    }
    if m.notice.is_some() {
        m.notice = None;
    }
}

fn handle_key_tab(m: &mut Model) {
    if m.detail_open {
        return;
    }
    m.mode = m.mode.next();
}

fn handle_key_up(m: &mut Model) {
    if m.results.is_empty() {
        return;
    }
    m.selected = m.selected.saturating_sub(1);
    follow_selection(m);
}

fn handle_key_down(m: &mut Model) {
    if m.results.is_empty() {
        return;
    }
    if m.selected + 1 < m.results.len() {
        m.selected += 1;
    }
    follow_selection(m);
}

// Open the detail overlay for the already-fetched selected record.
fn handle_key_right(m: &mut Model) {
    if m.loading || m.results.is_empty() {
        return;
    }
    m.detail_open = true;
}

fn handle_search_finished(m: &mut Model, outcome: Result<Vec<Cocktail>, String>) {
    // Cleared unconditionally, success and failure alike. A second in-flight
    // search simply overwrites whatever an earlier completion rendered.
    m.loading = false;
    match outcome {
        Ok(cocktails) => {
            if cocktails.is_empty() {
                m.show_notice(NoticeLevel::Info, "No cocktails found matching your search");
            } else {
                m.notice = None;
                m.results = cocktails;
                m.selected = 0;
                m.page = 0;
            }
        }
        Err(message) => {
            m.show_notice(NoticeLevel::Danger, &message);
        }
    }
}

// keep the page containing the selection visible
fn follow_selection(m: &mut Model) {
    if m.per_page > 0 {
        m.page = m.selected / m.per_page;
    }
}

#[cfg(test)]
mod tests {
    use crate::cocktail::{Cocktail, SearchMode};
    use crate::ui::model::{initial_model, NoticeLevel};

    fn cocktail(name: &str) -> Cocktail {
        Cocktail {
            name: name.to_string(),
            category: "Cocktail".to_string(),
            glass: "Coupe".to_string(),
            alcoholic: "Alcoholic".to_string(),
            instructions: "Build over ice.".to_string(),
            image: String::new(),
            ingredients: vec![],
        }
    }

    #[test]
    fn full_search_round_trip_through_update() {
        let mut m = initial_model("");
        for r in "mule".chars() {
            m.update(crate::ui::Msg::Rune(r));
        }
        m.update(crate::ui::Msg::KeyTab);
        m.update(crate::ui::Msg::KeyEnter);
        assert!(m.loading);
        let req = m.take_pending_request().expect("request expected");
        assert_eq!(req.mode, SearchMode::Ingredient);
        assert_eq!(req.query, "mule");

        m.update(crate::ui::Msg::SearchFinished(Ok(vec![
            cocktail("Moscow Mule"),
            cocktail("Jamaican Mule"),
        ])));
        assert!(!m.loading);
        assert_eq!(m.results.len(), 2);

        m.update(crate::ui::Msg::KeyDown);
        m.update(crate::ui::Msg::KeyRight);
        assert!(m.detail_open);
        assert_eq!(m.selected_cocktail().unwrap().name, "Jamaican Mule");

        // overlay swallows editing keys
        m.update(crate::ui::Msg::Rune('x'));
        m.update(crate::ui::Msg::KeyTab);
        assert_eq!(m.query, "mule");
        assert_eq!(m.mode, SearchMode::Ingredient);

        m.update(crate::ui::Msg::KeyEsc);
        assert!(!m.detail_open);
    }

    #[test]
    fn enter_closes_overlay_without_searching() {
        let mut m = initial_model("");
        m.query = "mule".to_string();
        m.results = vec![cocktail("Moscow Mule")];
        m.detail_open = true;
        m.update(crate::ui::Msg::KeyEnter);
        assert!(!m.detail_open);
        assert!(m.pending_request.is_none());
        assert!(!m.loading);
    }

    #[test]
    fn failed_then_successful_search_recovers() {
        let mut m = initial_model("");
        m.query = "mule".to_string();
        m.update(crate::ui::Msg::KeyEnter);
        m.update(crate::ui::Msg::SearchFinished(Err("boom".to_string())));
        assert_eq!(m.notice.as_ref().unwrap().level, NoticeLevel::Danger);

        m.update(crate::ui::Msg::KeyEnter);
        assert!(m.loading);
        assert!(m.notice.is_none(), "new search clears the failure notice");
        m.update(crate::ui::Msg::SearchFinished(Ok(vec![cocktail("Mule")])));
        assert_eq!(m.results.len(), 1);
        assert!(m.notice.is_none());
    }

    #[test]
    fn selection_keys_are_inert_without_results() {
        let mut m = initial_model("");
        m.update(crate::ui::Msg::KeyDown);
        m.update(crate::ui::Msg::KeyUp);
        assert_eq!(m.selected, 0);
        assert_eq!(m.page, 0);
    }

    #[test]
    fn resize_keeps_selection_on_the_visible_page() {
        let mut m = initial_model("");
        m.update(crate::ui::Msg::WindowSize {
            width: 80,
            height: 24,
        });
        let results: Vec<Cocktail> = (1..=10).map(|i| cocktail(&format!("Drink{i}"))).collect();
        m.update(crate::ui::Msg::SearchFinished(Ok(results)));
        for _ in 0..7 {
            m.update(crate::ui::Msg::KeyDown);
        }
        assert_eq!(m.selected, 7);

        // shrinking the terminal reduces per_page; the page must follow
        m.update(crate::ui::Msg::WindowSize {
            width: 80,
            height: 12,
        });
        assert_eq!(m.per_page, 3);
        assert_eq!(
            m.page,
            m.selected / m.per_page,
            "visible page must still contain the selection"
        );
    }

    #[test]
    fn window_size_never_yields_zero_cards_per_page() {
        let mut m = initial_model("");
        m.update(crate::ui::Msg::WindowSize {
            width: 20,
            height: 5,
        });
        assert!(m.per_page >= 1);
    }
}

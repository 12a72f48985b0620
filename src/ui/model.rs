use crate::api;
use crate::cocktail::{Cocktail, SearchMode, SearchRequest};

// small constants reused by rendering code
pub const QUERY_BLOCK_LINES: usize = 3;
pub const MODELINE_LINES: usize = 1;
pub const RESERVED_LINES: usize = QUERY_BLOCK_LINES + MODELINE_LINES;
pub const HEADER_LINES: usize = 1;
pub const CARD_LINES: usize = 2;
pub const DEFAULT_WIDTH: usize = 80;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Info,
    Danger,
}

// A transient message shown in place of results (status or error).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Model {
    pub endpoint: String,
    // query text as typed; trimmed only when a search is issued
    pub query: String,
    pub mode: SearchMode,
    pub loading: bool,
    pub results: Vec<Cocktail>,
    pub notice: Option<Notice>,
    pub selected: usize,
    pub detail_open: bool,
    // set by the update logic, drained by the program adapter which owns effects
    pub pending_request: Option<SearchRequest>,
    // pagination over result cards
    pub page: usize,
    pub per_page: usize,
    pub content_height: usize,
    pub screen_width: usize,
}

pub fn initial_model(endpoint: &str) -> Model {
    let endpoint = if endpoint.trim().is_empty() {
        api::DEFAULT_ENDPOINT.to_string()
    } else {
        endpoint.to_string()
    };
    Model {
        endpoint,
        ..Model::default()
    }
}

impl Model {
    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: crate::ui::Msg) {
        crate::ui::update::handle_update(self, msg);
    }

    // context string shown in the modeline
    pub fn status_label(&self) -> String {
        if self.loading {
            return "searching".to_string();
        }
        if self.detail_open {
            if let Some(c) = self.selected_cocktail() {
                return c.name.clone();
            }
        }
        format!("{} search", self.mode.label())
    }

    pub fn selected_cocktail(&self) -> Option<&Cocktail> {
        self.results.get(self.selected)
    }

    pub fn take_pending_request(&mut self) -> Option<SearchRequest> {
        self.pending_request.take()
    }

    pub fn total_pages(&self) -> usize {
        if self.results.is_empty() {
            return 1;
        }
        let per = if self.per_page == 0 {
            self.results.len()
        } else {
            self.per_page
        };
        self.results.len().div_ceil(per)
    }

    // Replace current result content with a single notice of the given severity.
    pub fn show_notice(&mut self, level: NoticeLevel, message: &str) {
        self.results.clear();
        self.selected = 0;
        self.page = 0;
        self.detail_open = false;
        self.notice = Some(Notice {
            level,
            message: message.to_string(),
        });
    }

    // Render helper wrappers that forward to the render module to keep this file focused on state.
    pub fn render_query_block(&self) -> Vec<String> {
        crate::ui::render::render_query_block(self)
    }
    pub fn render_cards_content(&self) -> String {
        crate::ui::render::render_cards_content(self)
    }
    pub fn render_detail_block(&self) -> Vec<String> {
        crate::ui::render::render_detail_block(self)
    }
    pub fn render_main_content(&self) -> String {
        crate::ui::render::render_main_content(self)
    }
    pub fn render_full(&self) -> String {
        crate::ui::render::render_full(self)
    }
}

// UI module root: split implementation into focused submodules under `ui/`

pub mod model;
pub mod render;
pub mod run;
pub mod update;

// Re-export commonly used symbols so call sites can use `crate::ui::initial_model` etc.
pub use model::{initial_model, Model, Notice, NoticeLevel};
pub use render::{render_full, render_main_content, render_modeline_padded, render_query_block};
pub use run::run_once;
pub use update::handle_update;

use crate::cocktail::Cocktail;

// Messages used by the update logic
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    WindowSize { width: usize, height: usize },
    KeyBackspace,
    KeyEnter,
    KeyEsc,
    KeyTab,
    Rune(char),
    KeyUp,
    KeyDown,
    KeyRight,
    SearchFinished(Result<Vec<Cocktail>, String>),
}

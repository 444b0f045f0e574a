pub mod render;

use std::path::Path;

use reno_engine::MediaFile;

/// Which pane on the upload step receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Prompt,
    Browser,
    Selection,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Prompt => Focus::Browser,
            Focus::Browser => Focus::Selection,
            Focus::Selection => Focus::Prompt,
        }
    }
}

/// Shell-owned presentation state handed to the renderer alongside the view
/// model: browser contents, cursors and focus never live in the core.
pub struct UiContext<'a> {
    pub focus: Focus,
    pub media_dir: &'a Path,
    pub browser: &'a [MediaFile],
    pub browser_index: usize,
    pub selection_index: usize,
}

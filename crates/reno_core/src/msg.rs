use crate::{FileHandle, FileId};

/// Messages dispatched into the pure `update` function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the brief text (full replacement, no validation).
    PromptChanged(String),
    /// Files picked from the media browser, already probed by the shell.
    FilesAdded(Vec<FileHandle>),
    /// User removed the selection entry at `index`.
    FileRemoved { index: usize },
    /// User asked for the next step.
    NextPressed,
    /// User asked for the previous step.
    BackPressed,
    /// The simulated analysis timer elapsed.
    AnalysisFinished,
    /// The engine issued a preview reference for a selected file.
    PreviewReady { file_id: FileId, reference: String },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

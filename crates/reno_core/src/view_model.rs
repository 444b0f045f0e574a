use crate::{FileId, StepId};

/// Outcome of the most recent add, shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddStats {
    pub added: usize,
    pub dropped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardViewModel {
    pub step: StepId,
    pub step_number: u8,
    pub analyzing: bool,
    pub prompt: String,
    pub files: Vec<FileRowView>,
    pub last_add: Option<AddStats>,
    pub chapter_count: usize,
    pub dirty: bool,
}

/// One selected file as presented to the shell. Sizes stay raw here;
/// formatting happens at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRowView {
    pub file_id: FileId,
    pub display_name: String,
    pub size_bytes: u64,
    pub preview: Option<String>,
}

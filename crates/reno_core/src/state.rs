use std::path::PathBuf;

use crate::view_model::{AddStats, FileRowView, WizardViewModel};

/// Upper bound on the selection. Adds beyond this keep the first six of the
/// combined list; the excess trailing handles are silently dropped.
pub const MAX_SELECTED_FILES: usize = 6;

pub type FileId = u64;

/// The five wizard stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum StepId {
    #[default]
    Upload,
    Confirm,
    Suggestions,
    ClipPreview,
    FinalPreview,
}

impl StepId {
    /// 1-based stage number as shown in the UI.
    pub fn number(self) -> u8 {
        match self {
            StepId::Upload => 1,
            StepId::Confirm => 2,
            StepId::Suggestions => 3,
            StepId::ClipPreview => 4,
            StepId::FinalPreview => 5,
        }
    }

    pub fn is_first(self) -> bool {
        self == StepId::Upload
    }

    pub fn is_last(self) -> bool {
        self == StepId::FinalPreview
    }

    pub(crate) fn next(self) -> Self {
        match self {
            StepId::Upload => StepId::Confirm,
            StepId::Confirm => StepId::Suggestions,
            StepId::Suggestions => StepId::ClipPreview,
            StepId::ClipPreview | StepId::FinalPreview => StepId::FinalPreview,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            StepId::Upload | StepId::Confirm => StepId::Upload,
            StepId::Suggestions => StepId::Confirm,
            StepId::ClipPreview => StepId::Suggestions,
            StepId::FinalPreview => StepId::ClipPreview,
        }
    }
}

/// A locally selected video file as resolved by the shell. Name and size
/// come from the filesystem probe; the core itself never touches the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub path: PathBuf,
    pub display_name: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SelectedFile {
    id: FileId,
    handle: FileHandle,
    /// Revocable preview reference issued by the engine, once available.
    preview: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    step: StepId,
    prompt: String,
    files: Vec<SelectedFile>,
    analyzing: bool,
    last_add: Option<AddStats>,
    next_file_id: FileId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> StepId {
        self.step
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> WizardViewModel {
        WizardViewModel {
            step: self.step,
            step_number: self.step.number(),
            analyzing: self.analyzing,
            prompt: self.prompt.clone(),
            files: self
                .files
                .iter()
                .map(|file| FileRowView {
                    file_id: file.id,
                    display_name: file.handle.display_name.clone(),
                    size_bytes: file.handle.size_bytes,
                    preview: file.preview.clone(),
                })
                .collect(),
            last_add: self.last_add.clone(),
            chapter_count: crate::catalog::chapters().len(),
            dirty: self.dirty,
        }
    }

    pub(crate) fn set_prompt(&mut self, text: String) {
        if self.prompt != text {
            self.prompt = text;
            self.mark_dirty();
        }
    }

    /// Appends handles up to the selection cap and returns the accepted
    /// entries so the caller can request previews for them.
    pub(crate) fn append_files(&mut self, incoming: Vec<FileHandle>) -> Vec<(FileId, PathBuf)> {
        let offered = incoming.len();
        let room = MAX_SELECTED_FILES.saturating_sub(self.files.len());
        let mut accepted = Vec::with_capacity(room.min(offered));
        for handle in incoming.into_iter().take(room) {
            self.next_file_id += 1;
            accepted.push((self.next_file_id, handle.path.clone()));
            self.files.push(SelectedFile {
                id: self.next_file_id,
                handle,
                preview: None,
            });
        }
        self.last_add = Some(AddStats {
            added: accepted.len(),
            dropped: offered - accepted.len(),
        });
        self.mark_dirty();
        accepted
    }

    /// Removes the entry at `index`, returning its id so the caller can
    /// revoke the matching preview. Out of range is a no-op.
    pub(crate) fn remove_file(&mut self, index: usize) -> Option<FileId> {
        if index >= self.files.len() {
            return None;
        }
        let removed = self.files.remove(index);
        self.mark_dirty();
        Some(removed.id)
    }

    /// Attaches an engine-issued preview reference. Returns false when the
    /// file was removed while the preview was in flight.
    pub(crate) fn attach_preview(&mut self, file_id: FileId, reference: String) -> bool {
        match self.files.iter_mut().find(|file| file.id == file_id) {
            Some(entry) => {
                entry.preview = Some(reference);
                self.mark_dirty();
                true
            }
            None => false,
        }
    }

    pub(crate) fn advance_step(&mut self) {
        let next = self.step.next();
        if next != self.step {
            self.step = next;
            self.mark_dirty();
        }
    }

    pub(crate) fn retreat_step(&mut self) {
        let prev = self.step.prev();
        if prev != self.step {
            self.step = prev;
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_analysis(&mut self) {
        self.analyzing = true;
        self.mark_dirty();
    }

    /// The analysis gate always lands on the suggestions step; there is no
    /// failure path and no cancellation.
    pub(crate) fn finish_analysis(&mut self) {
        self.analyzing = false;
        self.step = StepId::Suggestions;
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

use std::path::PathBuf;

use crate::FileId;

/// Side effects requested by `update`, executed by the shell's effect runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Derive a revocable preview reference for a newly selected file.
    CreatePreview { file_id: FileId, path: PathBuf },
    /// Release the preview reference of a removed file.
    RevokePreview { file_id: FileId },
    /// Start the simulated chapter analysis timer.
    StartAnalysis,
}

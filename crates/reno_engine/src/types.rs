pub type FileId = u64;

/// Events emitted by the engine worker back to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A preview reference was issued for a selected file.
    PreviewCreated { file_id: FileId, reference: String },
    /// The preview reference of a removed file was released.
    PreviewRevoked { file_id: FileId },
    /// The simulated chapter analysis timer elapsed.
    AnalysisComplete,
}

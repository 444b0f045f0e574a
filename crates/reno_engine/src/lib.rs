//! Reno engine: preview references, media probing and effect execution.
mod engine;
mod media;
mod preview;
mod types;

pub use engine::{EngineConfig, EngineHandle};
pub use media::{is_video_file, probe_file, scan_media_dir, MediaError, MediaFile, VIDEO_EXTENSIONS};
pub use preview::{format_file_size, FilePreview, PreviewStore};
pub use types::{EngineEvent, FileId};

use std::collections::HashMap;
use std::path::Path;

use crate::FileId;

const KB: u64 = 1024;
const MB: u64 = 1024 * 1024;

/// Formats a byte count the way the wizard displays file sizes: whole bytes
/// below 1 KB, one-decimal KB below 1 MB, one-decimal MB above.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

/// Derived, display-only view of a selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePreview {
    pub display_name: String,
    pub size_label: String,
    pub reference: String,
}

impl FilePreview {
    pub fn new(display_name: impl Into<String>, size_bytes: u64, reference: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            size_label: format_file_size(size_bytes),
            reference: reference.into(),
        }
    }
}

/// Issues revocable preview references, one per selected file.
///
/// References are the local stand-in for browser object URLs: create and
/// revoke must pair 1:1, otherwise the store grows without bound across
/// repeated add/remove cycles.
#[derive(Debug, Default)]
pub struct PreviewStore {
    entries: HashMap<FileId, String>,
    next_serial: u64,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh reference for `file_id`.
    pub fn create(&mut self, file_id: FileId, path: &Path) -> String {
        self.next_serial += 1;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("unnamed"));
        let reference = format!("preview://{}/{}", self.next_serial, name);
        self.entries.insert(file_id, reference.clone());
        reference
    }

    /// Releases the reference for `file_id`. Returns `None` when it was
    /// already revoked or never created, so a release happens at most once.
    pub fn revoke(&mut self, file_id: FileId) -> Option<String> {
        self.entries.remove(&file_id)
    }

    /// Releases every outstanding reference on teardown; returns how many
    /// were still live.
    pub fn revoke_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Number of live references. Zero after balanced create/revoke cycles.
    pub fn active_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{format_file_size, FilePreview, PreviewStore};

    #[test]
    fn sizes_below_one_kb_are_whole_bytes() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1023), "1023 B");
    }

    #[test]
    fn sizes_below_one_mb_are_one_decimal_kb() {
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
    }

    #[test]
    fn larger_sizes_are_one_decimal_mb() {
        assert_eq!(format_file_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.0 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
    }

    #[test]
    fn file_preview_carries_a_formatted_size() {
        let preview = FilePreview::new("intro.mp4", 2048, "preview://1/intro.mp4");
        assert_eq!(preview.size_label, "2.0 KB");
        assert_eq!(preview.display_name, "intro.mp4");
    }

    #[test]
    fn references_are_distinct_per_create() {
        let mut store = PreviewStore::new();
        let first = store.create(1, Path::new("/media/a.mp4"));
        let second = store.create(2, Path::new("/media/a.mp4"));
        assert_ne!(first, second);
        assert!(first.starts_with("preview://"));
        assert!(first.ends_with("a.mp4"));
    }

    #[test]
    fn revoke_pairs_with_create_exactly_once() {
        let mut store = PreviewStore::new();
        let reference = store.create(7, Path::new("/media/a.mp4"));
        assert_eq!(store.active_count(), 1);

        assert_eq!(store.revoke(7), Some(reference));
        assert_eq!(store.active_count(), 0);
        // A second revoke must not double-release.
        assert_eq!(store.revoke(7), None);
    }

    #[test]
    fn repeated_add_remove_cycles_do_not_accumulate() {
        let mut store = PreviewStore::new();
        for round in 0..100 {
            store.create(round, Path::new("/media/clip.mp4"));
            store.revoke(round);
        }
        assert_eq!(store.active_count(), 0);
    }

    #[test]
    fn revoke_all_clears_every_outstanding_reference() {
        let mut store = PreviewStore::new();
        for id in 0..4 {
            store.create(id, Path::new("/media/clip.mp4"));
        }
        assert_eq!(store.revoke_all(), 4);
        assert_eq!(store.active_count(), 0);
    }
}

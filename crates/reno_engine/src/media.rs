use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// File extensions accepted by the media browser, the terminal counterpart
/// of a file picker filtered to `video/*`.
pub const VIDEO_EXTENSIONS: [&str; 6] = ["mp4", "m4v", "mov", "mkv", "webm", "avi"];

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("media directory missing or unreadable: {0}")]
    Dir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A probed local video file offered by the media browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub path: PathBuf,
    pub display_name: String,
    pub size_bytes: u64,
}

pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Probes one file into a browser row. Name and size are resolved here so
/// the core never has to touch the filesystem.
pub fn probe_file(path: &Path) -> Result<MediaFile, MediaError> {
    let metadata = fs::metadata(path)?;
    let display_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(MediaFile {
        path: path.to_path_buf(),
        display_name,
        size_bytes: metadata.len(),
    })
}

/// Lists the video files directly under `dir`, sorted by name.
pub fn scan_media_dir(dir: &Path) -> Result<Vec<MediaFile>, MediaError> {
    let meta = fs::metadata(dir).map_err(|err| MediaError::Dir(err.to_string()))?;
    if !meta.is_dir() {
        return Err(MediaError::Dir("path is not a directory".into()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file() && is_video_file(&path) {
            files.push(probe_file(&path)?);
        }
    }
    files.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::{is_video_file, probe_file, scan_media_dir};

    #[test]
    fn extension_filter_is_case_insensitive() {
        assert!(is_video_file(Path::new("a.mp4")));
        assert!(is_video_file(Path::new("b.MOV")));
        assert!(!is_video_file(Path::new("notes.txt")));
        assert!(!is_video_file(Path::new("no_extension")));
    }

    #[test]
    fn probe_reports_name_and_size() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("intro.mp4");
        fs::write(&path, vec![0u8; 512]).expect("write");

        let probed = probe_file(&path).expect("probe");
        assert_eq!(probed.display_name, "intro.mp4");
        assert_eq!(probed.size_bytes, 512);
    }

    #[test]
    fn scan_filters_and_sorts_by_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("b.mp4"), b"bb").expect("write");
        fs::write(dir.path().join("a.webm"), b"a").expect("write");
        fs::write(dir.path().join("notes.txt"), b"x").expect("write");
        fs::create_dir(dir.path().join("nested.mp4")).expect("mkdir");

        let files = scan_media_dir(dir.path()).expect("scan");
        let names: Vec<_> = files.iter().map(|file| file.display_name.as_str()).collect();
        assert_eq!(names, vec!["a.webm", "b.mp4"]);
    }

    #[test]
    fn scan_of_missing_dir_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("gone");
        assert!(scan_media_dir(&missing).is_err());
    }
}

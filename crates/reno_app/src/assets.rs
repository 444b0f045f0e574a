//! Asset root handling for the mocked sample clips.

/// Asset root captured at build time from `ASSET_BASE_PATH` (default `/`).
const ASSET_BASE: &str = env!("ASSET_BASE_PATH");

/// Joins the build-time asset root onto a catalog clip path.
pub fn asset_path(relative: &str) -> String {
    join(ASSET_BASE, relative)
}

fn join(base: &str, relative: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), relative)
}

#[cfg(test)]
mod tests {
    use super::join;

    #[test]
    fn default_base_keeps_absolute_paths() {
        assert_eq!(join("/", "/videos/sample-1.mp4"), "/videos/sample-1.mp4");
    }

    #[test]
    fn custom_base_is_prefixed_without_double_slashes() {
        assert_eq!(join("/cdn/", "/videos/final-demo.mp4"), "/cdn/videos/final-demo.mp4");
        assert_eq!(join("/cdn", "/videos/final-demo.mp4"), "/cdn/videos/final-demo.mp4");
    }
}

use std::path::{Component, Path, PathBuf};

/// Check that a site-relative URL path stays inside the site root.
///
/// Rejects absolute paths, drive-prefixed paths and any path containing a
/// parent-directory component.
pub fn is_safe_relative(url_path: &str) -> bool {
    if url_path.is_empty() || url_path.starts_with('/') || url_path.contains('\\') {
        return false;
    }

    Path::new(url_path).components().all(|component| {
        matches!(component, Component::Normal(_) | Component::CurDir)
    })
}

/// Map a site-relative URL path to a file path under the given root.
///
/// Directory-style paths ("guides/" or extension-less "guides") resolve to
/// an index.html inside the directory.
pub fn url_to_file_path<P: AsRef<Path>>(root: P, url_path: &str) -> PathBuf {
    let trimmed = url_path.trim_start_matches('/');
    let mut path = root.as_ref().to_path_buf();

    if trimmed.is_empty() {
        path.push("index.html");
        return path;
    }

    path.push(trimmed);

    let has_extension = Path::new(trimmed)
        .extension()
        .and_then(|e| e.to_str())
        .is_some();

    if trimmed.ends_with('/') || !has_extension {
        path.push("index.html");
    }

    path
}

/// Make a path relative to a base directory, for display in logs and reports
pub fn make_relative<P: AsRef<Path>, B: AsRef<Path>>(path: P, base: B) -> PathBuf {
    path.as_ref()
        .strip_prefix(base.as_ref())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|_| path.as_ref().to_path_buf())
}

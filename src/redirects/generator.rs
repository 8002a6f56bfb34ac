use log::{debug, info};

use crate::config::Config;
use crate::utils::error::{BoxResult, DocsmithError};
use crate::utils::fs::write_file;
use crate::utils::path::{is_safe_relative, url_to_file_path};

/// Write a redirect stub page for every moved URL in the configuration.
///
/// Returns the number of stubs written. An existing real page at an old
/// path is an error rather than something to silently overwrite: a
/// redirect source that still exists means the move has not happened.
pub fn generate_redirects(config: &Config) -> BoxResult<usize> {
    let output_dir = config.output_dir();
    let mut written = 0;

    for (old_path, target) in &config.redirects {
        // Validation already rejects these, but the generator guards its
        // own inputs since it also runs on programmatic configs.
        if !is_safe_relative(old_path) {
            return Err(DocsmithError::Redirect(format!(
                "Redirect source \"{}\" escapes the site directory",
                old_path
            ))
            .into());
        }

        let stub_path = url_to_file_path(output_dir, old_path);
        if stub_path.exists() {
            return Err(DocsmithError::Redirect(format!(
                "Redirect source \"{}\" still exists at {}",
                old_path,
                stub_path.display()
            ))
            .into());
        }

        debug!("Writing redirect stub {} -> {}", old_path, target);
        write_file(&stub_path, &redirect_page(target))?;
        written += 1;
    }

    if written > 0 {
        info!("Wrote {} redirect stubs to {}", written, output_dir.display());
    }

    Ok(written)
}

/// Render a redirect stub page for the given target URL.
///
/// The stub carries a zero-delay meta refresh, a canonical link for
/// crawlers and a fallback anchor for browsers with refresh disabled.
pub fn redirect_page(target: &str) -> String {
    let href = html_escape::encode_double_quoted_attribute(target);
    let label = html_escape::encode_text(target);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta http-equiv="refresh" content="0; url={href}">
<link rel="canonical" href="{href}">
<title>This page has moved</title>
</head>
<body>
<p>This page has moved to <a href="{href}">{label}</a>.</p>
</body>
</html>
"#,
        href = href,
        label = label
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs::read_file;
    use std::path::Path;
    use tempfile::tempdir;

    fn config_with(dir: &Path, redirects: &[(&str, &str)]) -> Config {
        let mut config = Config::default();
        config.site_dir = dir.to_path_buf();
        for (old, new) in redirects {
            config.redirects.insert(old.to_string(), new.to_string());
        }
        config
    }

    #[test]
    fn test_stub_written_at_old_path() {
        let dir = tempdir().unwrap();
        let config = config_with(dir.path(), &[("old.html", "new.html")]);

        let written = generate_redirects(&config).unwrap();
        assert_eq!(written, 1);

        let stub = read_file(dir.path().join("old.html")).unwrap();
        assert!(stub.contains("content=\"0; url=new.html\""));
        assert!(stub.contains("<link rel=\"canonical\" href=\"new.html\">"));
        assert!(stub.contains("<a href=\"new.html\">new.html</a>"));
    }

    #[test]
    fn test_directory_style_source() {
        let dir = tempdir().unwrap();
        let config = config_with(dir.path(), &[("guides/", "https://example.org/handbook/")]);

        generate_redirects(&config).unwrap();

        assert!(dir.path().join("guides/index.html").exists());
    }

    #[test]
    fn test_existing_page_not_overwritten() {
        let dir = tempdir().unwrap();
        write_file(dir.path().join("old.html"), "real content").unwrap();
        let config = config_with(dir.path(), &[("old.html", "new.html")]);

        assert!(generate_redirects(&config).is_err());
        assert_eq!(read_file(dir.path().join("old.html")).unwrap(), "real content");
    }

    #[test]
    fn test_target_escaped_in_markup() {
        let page = redirect_page("new.html?a=1&b=2");

        assert!(page.contains("url=new.html?a=1&amp;b=2"));
        assert!(!page.contains("a=1&b"));
    }

    #[test]
    fn test_no_redirects_is_noop() {
        let dir = tempdir().unwrap();
        let config = config_with(dir.path(), &[]);

        assert_eq!(generate_redirects(&config).unwrap(), 0);
    }
}

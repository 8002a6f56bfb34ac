use crate::config::types::Config;
use crate::toc::parse_levels;
use crate::utils::error::{BoxResult, DocsmithError};
use crate::utils::path::is_safe_relative;

/// Validate a configuration before any command acts on it
pub fn validate_config(config: &Config) -> BoxResult<()> {
    if config.toc.enabled {
        if config.toc.container_id.trim().is_empty() {
            return Err(DocsmithError::Config(
                "toc.container_id must not be empty".to_string(),
            )
            .into());
        }

        if parse_levels(&config.toc.levels).is_empty() {
            return Err(DocsmithError::Config(format!(
                "toc.levels \"{}\" contains no valid heading levels",
                config.toc.levels
            ))
            .into());
        }
    }

    if config.anchors.enabled {
        let min = config.anchors.min_level;
        let max = config.anchors.max_level;

        if !(1..=6).contains(&min) || !(1..=6).contains(&max) {
            return Err(DocsmithError::Config(format!(
                "anchors levels must lie in 1..=6 (got {}..={})",
                min, max
            ))
            .into());
        }
        if min > max {
            return Err(DocsmithError::Config(format!(
                "anchors.min_level {} exceeds anchors.max_level {}",
                min, max
            ))
            .into());
        }
    }

    for (old, target) in &config.redirects {
        if !is_safe_relative(old) {
            return Err(DocsmithError::Config(format!(
                "redirect source \"{}\" must be a relative path inside the site",
                old
            ))
            .into());
        }
        if target.trim().is_empty() {
            return Err(DocsmithError::Config(format!(
                "redirect target for \"{}\" must not be empty",
                old
            ))
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_container_id_rejected() {
        let mut config = Config::default();
        config.toc.container_id = "  ".to_string();

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_bad_levels_rejected_only_when_enabled() {
        let mut config = Config::default();
        config.toc.levels = "h9".to_string();
        assert!(validate_config(&config).is_err());

        config.toc.enabled = false;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_inverted_anchor_range_rejected() {
        let mut config = Config::default();
        config.anchors.min_level = 4;
        config.anchors.max_level = 2;

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_unsafe_redirect_rejected() {
        let mut config = Config::default();
        config
            .redirects
            .insert("../escape.html".to_string(), "new.html".to_string());

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_redirects_accepted() {
        let mut config = Config::default();
        config
            .redirects
            .insert("old.html".to_string(), "https://example.org/new.html".to_string());
        config
            .redirects
            .insert("guides/".to_string(), "handbook/index.html".to_string());

        assert!(validate_config(&config).is_ok());
    }
}

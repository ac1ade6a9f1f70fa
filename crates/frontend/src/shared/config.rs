//! Page-level configuration.
//!
//! A page may carry `<script id="site-config" type="application/json">` with
//! overrides; without it the built-in defaults apply.

use contracts::shared::config::{load_config, SiteConfig};

use crate::shared::dom;

const CONFIG_ELEMENT_ID: &str = "site-config";

pub fn read_site_config() -> Result<SiteConfig, String> {
    let raw = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    load_config(raw.as_deref()).map_err(|e| format!("{:#}", e))
}

/// Console log level for the configured name, `Info` when unrecognised
pub fn log_level(config: &SiteConfig) -> log::Level {
    config
        .log_level
        .parse::<log::Level>()
        .unwrap_or(log::Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        let mut config = SiteConfig::default();
        assert_eq!(log_level(&config), log::Level::Debug);
        config.log_level = "WARN".to_string();
        assert_eq!(log_level(&config), log::Level::Warn);
        config.log_level = "chatty".to_string();
        assert_eq!(log_level(&config), log::Level::Info);
    }
}

use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::jobs::ClosingSchedule;
use crate::shared::routing::RouterConfig;

/// Site-wide client configuration.
///
/// Every section is `#[serde(default)]`, so a page only has to spell out the
/// values it overrides.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: String,
    pub theme: ThemeConfig,
    pub site_router: SiteRouterConfig,
    pub sub_routers: Vec<SubRouterConfig>,
    pub jobs: JobsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SiteRouterConfig {
    pub default_view: String,
    pub anchor_prefix: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SubRouterConfig {
    pub name: String,
    pub default_view: String,
    /// CSS selector limiting which `.view` panes this router owns
    pub root: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct JobsConfig {
    pub posted_on: NaiveDate,
    pub closing_after_days: i64,
    pub extended_closing_after_days: i64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            theme: ThemeConfig::default(),
            site_router: SiteRouterConfig::default(),
            sub_routers: vec![
                SubRouterConfig::named("jobs"),
                SubRouterConfig::named("news"),
            ],
            jobs: JobsConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
        }
    }
}

impl Default for SiteRouterConfig {
    fn default() -> Self {
        Self {
            default_view: "home".to_string(),
            anchor_prefix: Some("#home-".to_string()),
        }
    }
}

impl SiteRouterConfig {
    pub fn router(&self) -> RouterConfig {
        RouterConfig::site(self.default_view.clone(), self.anchor_prefix.clone())
    }
}

impl Default for SubRouterConfig {
    fn default() -> Self {
        Self::named("")
    }
}

impl SubRouterConfig {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            default_view: "list".to_string(),
            root: None,
        }
    }

    pub fn router(&self) -> RouterConfig {
        RouterConfig::sub(self.default_view.clone())
    }
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            posted_on: NaiveDate::from_ymd_opt(2025, 8, 17).unwrap_or_default(),
            closing_after_days: 31,
            extended_closing_after_days: 45,
        }
    }
}

impl JobsConfig {
    pub fn schedule(&self) -> ClosingSchedule {
        ClosingSchedule {
            posted_on: self.posted_on,
            standard_days: self.closing_after_days,
            extended_days: self.extended_closing_after_days,
        }
    }
}

/// Build the configuration from the page's optional JSON override.
///
/// `None` or a blank string yields the defaults.
pub fn load_config(raw: Option<&str>) -> anyhow::Result<SiteConfig> {
    match raw.map(str::trim) {
        None | Some("") => Ok(SiteConfig::default()),
        Some(json) => serde_json::from_str(json).context("invalid site configuration JSON"),
    }
}

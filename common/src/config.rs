use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{Level, debug, instrument, warn};

use crate::{
    preloader::PreloaderConfig,
    scroll::Band,
    theme::THEME_KEY,
    toast::{DEFAULT_LIMIT, ToastBus},
};

// site configuration
//
// the web binary embeds site.toml at compile time.  every field has a default, so a partial
// file (or no file at all) still yields a working site
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub preloader: PreloaderSettings,
    pub toasts: ToastSettings,
    pub scroll_spy: ScrollSpySettings,
    pub nav: NavSettings,
    pub contact: ContactSettings,
    pub theme: ThemeSettings,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PreloaderSettings {
    pub min_dwell_ms: u32,
    pub fade_out_ms: u32,
}

impl Default for PreloaderSettings {
    fn default() -> Self {
        PreloaderSettings {
            min_dwell_ms: 2000,
            fade_out_ms: 500,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ToastSettings {
    pub limit: usize,
    pub ttl_ms: u32,
}

impl Default for ToastSettings {
    fn default() -> Self {
        ToastSettings {
            limit: DEFAULT_LIMIT,
            ttl_ms: 5000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollSpySettings {
    pub band_top: f64,
    pub band_height: f64,
}

impl Default for ScrollSpySettings {
    fn default() -> Self {
        ScrollSpySettings {
            band_top: 150.0,
            band_height: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NavSettings {
    // px of scroll before the bar turns solid
    pub scrolled_threshold: f64,
    // viewport width at which the inline links replace the hamburger
    pub breakpoint: f64,
    pub scroll_top_threshold: f64,
}

impl Default for NavSettings {
    fn default() -> Self {
        NavSettings {
            scrolled_threshold: 10.0,
            breakpoint: 768.0,
            scroll_top_threshold: 400.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactSettings {
    pub endpoint: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        ContactSettings {
            endpoint: api::contact::CONTACT_ENDPOINT.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub storage_key: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        ThemeSettings {
            storage_key: THEME_KEY.to_owned(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid site config: {0}")]
    Invalid(String),
}

impl SiteConfig {
    pub fn parse(doc: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(doc)?;

        if config.contact.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("contact.endpoint is empty".to_owned()));
        }

        if config.nav.breakpoint.is_nan() || config.nav.breakpoint <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "nav.breakpoint must be positive, got {}",
                config.nav.breakpoint
            )));
        }

        Ok(config)
    }

    // the site never refuses to start over its config
    #[instrument(level=Level::DEBUG, skip_all)]
    pub fn load_or_default(doc: &str) -> Self {
        match SiteConfig::parse(doc) {
            Ok(config) => {
                debug!(?config, "loaded site config");
                config
            }
            Err(err) => {
                warn!(%err, "using default site config");
                SiteConfig::default()
            }
        }
    }

    pub fn preloader(&self) -> PreloaderConfig {
        PreloaderConfig {
            min_dwell: TimeDelta::milliseconds(self.preloader.min_dwell_ms.into()),
            fade_out: TimeDelta::milliseconds(self.preloader.fade_out_ms.into()),
        }
    }

    pub fn band(&self) -> Band {
        Band::new(self.scroll_spy.band_top, self.scroll_spy.band_height)
    }

    pub fn toast_bus(&self) -> ToastBus {
        ToastBus::new(
            self.toasts.limit,
            TimeDelta::milliseconds(self.toasts.ttl_ms.into()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = SiteConfig::parse("").unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.preloader(), PreloaderConfig::default());
        assert_eq!(config.band(), Band::default());
        assert_eq!(config.contact.endpoint, "/api/contact");
        assert_eq!(config.theme.storage_key, "theme");
    }

    #[test]
    fn partial_tables_keep_the_other_defaults() {
        let config = SiteConfig::parse(
            r#"
            [preloader]
            min_dwell_ms = 1200

            [toasts]
            limit = 1
            "#,
        )
        .unwrap();

        assert_eq!(config.preloader().min_dwell, TimeDelta::milliseconds(1200));
        assert_eq!(config.preloader().fade_out, TimeDelta::milliseconds(500));
        assert_eq!(config.toast_bus().limit(), 1);
        assert_eq!(config.nav, NavSettings::default());
    }

    #[test]
    fn broken_documents_fall_back() {
        assert!(matches!(
            SiteConfig::parse("[preloader\nmin_dwell_ms = "),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SiteConfig::parse("[contact]\nendpoint = \"  \""),
            Err(ConfigError::Invalid(_))
        ));

        assert_eq!(SiteConfig::load_or_default("nonsense = = ="), SiteConfig::default());
    }

    #[test]
    fn shipped_config_parses() {
        let config = SiteConfig::parse(include_str!("../../webapp/site.toml")).unwrap();
        assert_eq!(config.preloader(), PreloaderConfig::default());
    }
}

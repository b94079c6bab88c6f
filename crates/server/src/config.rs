use std::{collections::HashMap, fs};

use serde::Deserialize;
use site::ExternalLinks;
use tracing::warn;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub bind_addr: String,
    pub contacts_path: String,
    pub assets_dir: String,
    pub stylesheet_path: String,
    pub resume_path: String,
    /// Filename offered to the browser when the resume is downloaded.
    pub resume_download_name: String,
    pub linkedin_url: String,
    pub portfolio_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".into(),
            contacts_path: "contacts.csv".into(),
            assets_dir: "assets".into(),
            stylesheet_path: "style.css".into(),
            resume_path: "resume.pdf".into(),
            resume_download_name: "Aliyah-Regacho-Resume.pdf".into(),
            linkedin_url: "https://www.linkedin.com/in/aliyahregacho0528/".into(),
            portfolio_url:
                "https://www.canva.com/design/DAGSnLhy04U/19rPO8edboYw9jYQ1wz9FQ/view".into(),
        }
    }
}

/// Compiled-in defaults, overlaid by `site.toml` in the working
/// directory, overlaid by environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("site.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("bind_addr") {
                settings.bind_addr = v.clone();
            }
            if let Some(v) = file_cfg.get("contacts_path") {
                settings.contacts_path = v.clone();
            }
            if let Some(v) = file_cfg.get("assets_dir") {
                settings.assets_dir = v.clone();
            }
            if let Some(v) = file_cfg.get("stylesheet_path") {
                settings.stylesheet_path = v.clone();
            }
            if let Some(v) = file_cfg.get("resume_path") {
                settings.resume_path = v.clone();
            }
            if let Some(v) = file_cfg.get("resume_download_name") {
                settings.resume_download_name = v.clone();
            }
            if let Some(v) = file_cfg.get("linkedin_url") {
                settings.linkedin_url = v.clone();
            }
            if let Some(v) = file_cfg.get("portfolio_url") {
                settings.portfolio_url = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("SITE_BIND") {
        settings.bind_addr = v;
    }
    if let Ok(v) = std::env::var("SITE_CONTACTS_PATH") {
        settings.contacts_path = v;
    }
    if let Ok(v) = std::env::var("SITE_ASSETS_DIR") {
        settings.assets_dir = v;
    }
    if let Ok(v) = std::env::var("SITE_STYLESHEET_PATH") {
        settings.stylesheet_path = v;
    }
    if let Ok(v) = std::env::var("SITE_RESUME_PATH") {
        settings.resume_path = v;
    }
    if let Ok(v) = std::env::var("SITE_LINKEDIN_URL") {
        settings.linkedin_url = v;
    }
    if let Ok(v) = std::env::var("SITE_PORTFOLIO_URL") {
        settings.portfolio_url = v;
    }

    settings
}

/// Validate the configured outbound links; an unparseable override is
/// logged and replaced with the compiled-in default so the buttons never
/// point nowhere.
pub fn external_links(settings: &Settings) -> ExternalLinks {
    let defaults = Settings::default();
    ExternalLinks {
        linkedin: checked_url(&settings.linkedin_url, &defaults.linkedin_url, "linkedin_url"),
        portfolio: checked_url(
            &settings.portfolio_url,
            &defaults.portfolio_url,
            "portfolio_url",
        ),
    }
}

fn checked_url(raw: &str, fallback: &str, key: &str) -> String {
    match Url::parse(raw) {
        Ok(_) => raw.to_string(),
        Err(error) => {
            warn!(%key, %error, "invalid external url, keeping default");
            fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_deployed_layout() {
        let settings = Settings::default();
        assert_eq!(settings.contacts_path, "contacts.csv");
        assert_eq!(settings.assets_dir, "assets");
        assert_eq!(settings.resume_path, "resume.pdf");
    }

    #[test]
    fn env_override_wins_over_defaults() {
        std::env::set_var("SITE_BIND", "0.0.0.0:9999");
        let settings = load_settings();
        std::env::remove_var("SITE_BIND");
        assert_eq!(settings.bind_addr, "0.0.0.0:9999");
    }

    #[test]
    fn invalid_external_url_falls_back_to_default() {
        let mut settings = Settings::default();
        settings.linkedin_url = "not a url".into();
        let links = external_links(&settings);
        assert_eq!(links.linkedin, Settings::default().linkedin_url);
        assert_eq!(links.portfolio, settings.portfolio_url);
    }
}

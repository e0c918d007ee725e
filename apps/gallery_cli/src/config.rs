use std::{fs, time::Duration};

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source_url: String,
    pub page_size: usize,
    pub loading_delay_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_url: gallery_core::DEFAULT_POSTS_ENDPOINT.into(),
            page_size: gallery_core::DEFAULT_PAGE_SIZE,
            loading_delay_secs: gallery_core::DEFAULT_LOADING_DELAY.as_secs(),
        }
    }
}

impl Settings {
    pub fn loading_delay(&self) -> Duration {
        Duration::from_secs(self.loading_delay_secs)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    source_url: Option<String>,
    page_size: Option<usize>,
    loading_delay_secs: Option<u64>,
}

/// Defaults, then `gallery.toml`, then environment variables; later sources
/// win. Unparseable file or env values fall back silently, like missing ones.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("gallery.toml") {
        merge_file(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("GALLERY_SOURCE_URL") {
        settings.source_url = v;
    }
    if let Ok(v) = std::env::var("GALLERY_PAGE_SIZE") {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.page_size = parsed;
        }
    }
    if let Ok(v) = std::env::var("GALLERY_LOADING_DELAY_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.loading_delay_secs = parsed;
        }
    }

    settings
}

fn merge_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<FileSettings>(raw) else {
        return;
    };
    if let Some(v) = file_cfg.source_url {
        settings.source_url = v;
    }
    if let Some(v) = file_cfg.page_size {
        settings.page_size = v;
    }
    if let Some(v) = file_cfg.loading_delay_secs {
        settings.loading_delay_secs = v;
    }
}

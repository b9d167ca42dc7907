use crate::api::{HttpKitnetApi, KitnetApi};
use crate::cep::{AddressLookup, BrasilApiLookup};
use crate::config::Config;
use crate::domain::pagination::DEFAULT_PAGE_SIZE;
use std::error::Error;
use std::time::Duration;

const MB: u64 = 1024 * 1024;

/// Limits and URLs the handlers need at request time.
#[derive(Debug, Clone)]
pub struct Settings {
    pub backend_base: String,
    pub max_photo_bytes: u64,
    pub max_request_bytes: u64,
    pub max_form_bytes: u64,
    pub page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_base: "http://localhost:8080".to_string(),
            max_photo_bytes: 15 * MB,
            max_request_bytes: 200 * MB,
            max_form_bytes: 64 * 1024,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl From<&Config> for Settings {
    fn from(cfg: &Config) -> Self {
        Self {
            backend_base: cfg.backend_url.trim_end_matches('/').to_string(),
            max_photo_bytes: cfg.max_photo_mb * MB,
            max_request_bytes: cfg.max_request_mb * MB,
            page_size: cfg.page_size.max(1),
            ..Settings::default()
        }
    }
}

/// Shared by every worker thread.
pub struct App {
    pub api: Box<dyn KitnetApi>,
    pub addresses: Box<dyn AddressLookup>,
    pub settings: Settings,
}

impl App {
    pub fn from_config(cfg: &Config) -> Result<Self, Box<dyn Error>> {
        let timeout = Duration::from_secs(cfg.http_timeout_secs);

        Ok(Self {
            api: Box::new(HttpKitnetApi::new(&cfg.backend_url, timeout)?),
            addresses: Box::new(BrasilApiLookup::new(&cfg.cep_api_url, timeout)?),
            settings: Settings::from(cfg),
        })
    }
}

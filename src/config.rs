//! Renderer configuration: brand copy, image proxy, timeouts.

use std::path::Path;
use std::time::Duration;

use crate::foundation::error::{CardError, CardResult};

/// Options shared by the loader, the renderers and the download helpers.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Origin of the hosting site, used to build image proxy URLs.
    pub site_origin: String,
    /// Path of the same-origin image optimization endpoint.
    pub proxy_path: String,
    /// `w` parameter passed to the image proxy.
    pub proxy_width: u32,
    /// `q` parameter passed to the image proxy.
    pub proxy_quality: u8,
    /// Per-attempt fetch timeout in milliseconds.
    pub fetch_timeout_ms: u64,
    /// Font family used for every text layer.
    pub font_family: String,
    /// Wordmark split into its two colored segments.
    pub wordmark: (String, String),
    /// Canonical domain printed on the CTA card.
    pub domain: String,
    /// Social handle printed on the CTA card.
    pub social_handle: String,
    /// CTA headline above the QR box.
    pub cta_headline: String,
    /// Closing line at the bottom of the CTA card.
    pub cta_closing: String,
    /// QR code edge length in pixels.
    pub qr_size_px: u32,
    /// Delay between consecutive writes in a batch save, in milliseconds.
    pub download_stagger_ms: u64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            site_origin: "https://gglobby.in".to_owned(),
            proxy_path: "/_next/image".to_owned(),
            proxy_width: 1080,
            proxy_quality: 85,
            fetch_timeout_ms: 10_000,
            font_family: "Inter".to_owned(),
            wordmark: ("gg".to_owned(), "Lobby".to_owned()),
            domain: "gglobby.in".to_owned(),
            social_handle: "@gglobby".to_owned(),
            cta_headline: "Read the full article".to_owned(),
            cta_closing: "Join the lobby. Level up your feed.".to_owned(),
            qr_size_px: 400,
            download_stagger_ms: 300,
        }
    }
}

impl CardConfig {
    /// Load from a JSON file; missing fields keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            CardError::validation(format!("failed to read config '{}': {e}", path.display()))
        })?;
        let cfg: Self = serde_json::from_slice(&bytes).map_err(|e| {
            CardError::validation(format!("invalid config '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply `SHARECARD_*` environment overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(origin) = std::env::var("SHARECARD_SITE_ORIGIN")
            .ok()
            .filter(|v| !v.trim().is_empty())
        {
            self.site_origin = origin.trim().trim_end_matches('/').to_owned();
        }
        if let Some(ms) = std::env::var("SHARECARD_FETCH_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&n| n > 0)
        {
            self.fetch_timeout_ms = ms;
        }
        if let Some(family) = std::env::var("SHARECARD_FONT_FAMILY")
            .ok()
            .filter(|v| !v.trim().is_empty())
        {
            self.font_family = family.trim().to_owned();
        }
        self
    }

    /// Reject values the renderers cannot work with.
    pub fn validate(&self) -> CardResult<()> {
        if self.fetch_timeout_ms == 0 {
            return Err(CardError::validation("fetch_timeout_ms must be > 0"));
        }
        if self.proxy_width == 0 {
            return Err(CardError::validation("proxy_width must be > 0"));
        }
        if self.proxy_quality == 0 || self.proxy_quality > 100 {
            return Err(CardError::validation("proxy_quality must be in 1..=100"));
        }
        if !(64..=900).contains(&self.qr_size_px) {
            return Err(CardError::validation("qr_size_px must be in 64..=900"));
        }
        if self.font_family.trim().is_empty() {
            return Err(CardError::validation("font_family must be non-empty"));
        }
        Ok(())
    }

    /// Per-attempt fetch timeout.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    /// Delay between consecutive batch writes.
    pub fn download_stagger(&self) -> Duration {
        Duration::from_millis(self.download_stagger_ms)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

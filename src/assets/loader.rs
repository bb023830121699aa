//! Remote image loading through an ordered chain of fetch strategies.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::assets::bitmap::{Bitmap, decode_image};
use crate::config::CardConfig;
use crate::foundation::error::{CardError, CardResult};

/// One way of turning an image URL into encoded bytes.
#[async_trait]
pub trait FetchStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether this strategy should be tried for `url`.
    fn accepts(&self, url: &str) -> bool;

    /// Fetch the encoded image bytes.
    async fn fetch(&self, url: &str) -> CardResult<Vec<u8>>;
}

pub fn is_data_uri(url: &str) -> bool {
    url.get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
}

/// Decodes `data:` URIs in-process; never touches the network.
#[derive(Clone, Copy, Debug, Default)]
pub struct DataUriStrategy;

#[async_trait]
impl FetchStrategy for DataUriStrategy {
    fn name(&self) -> &'static str {
        "data-uri"
    }

    fn accepts(&self, url: &str) -> bool {
        is_data_uri(url)
    }

    async fn fetch(&self, url: &str) -> CardResult<Vec<u8>> {
        decode_data_uri(url)
    }
}

/// Decode `data:[<mediatype>][;base64],<data>`.
pub fn decode_data_uri(url: &str) -> CardResult<Vec<u8>> {
    if !is_data_uri(url) {
        return Err(CardError::validation("not a data uri"));
    }
    let rest = &url[5..];
    let (meta, data) = rest
        .split_once(',')
        .ok_or_else(|| CardError::validation("data uri is missing ','"))?;
    let is_base64 = meta
        .split(';')
        .any(|p| p.trim().eq_ignore_ascii_case("base64"));

    if is_base64 {
        let compact: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        BASE64
            .decode(compact.as_bytes())
            .map_err(|e| CardError::validation(format!("invalid base64 in data uri: {e}")))
    } else {
        percent_decode(data)
    }
}

fn percent_decode(s: &str) -> CardResult<Vec<u8>> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes
                .get(i + 1..i + 3)
                .and_then(|h| std::str::from_utf8(h).ok())
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| CardError::validation("invalid percent escape in data uri"))?;
            out.push(hex);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Ok(out)
}

async fn get_bytes(client: &reqwest::Client, url: reqwest::Url) -> CardResult<Vec<u8>> {
    let display = url.to_string();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| CardError::image_load(&display, format!("request failed: {e}")))?;
    let status = response.status();
    if !status.is_success() {
        return Err(CardError::image_load(&display, format!("status {status}")));
    }
    let body = response
        .bytes()
        .await
        .map_err(|e| CardError::image_load(&display, format!("failed to read body: {e}")))?;
    Ok(body.to_vec())
}

/// Plain cross-origin GET of the image URL.
#[derive(Clone, Debug)]
pub struct DirectFetch {
    client: reqwest::Client,
}

impl DirectFetch {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FetchStrategy for DirectFetch {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn accepts(&self, url: &str) -> bool {
        !is_data_uri(url)
    }

    async fn fetch(&self, url: &str) -> CardResult<Vec<u8>> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| CardError::image_load(url, format!("invalid url: {e}")))?;
        get_bytes(&self.client, parsed).await
    }
}

/// GET through the site's own image optimization endpoint.
///
/// The endpoint re-encodes the remote image, which sidesteps hotlink and
/// cross-origin restrictions on the original host.
#[derive(Clone, Debug)]
pub struct ProxyFetch {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    width: u32,
    quality: u8,
}

impl ProxyFetch {
    pub fn new(
        client: reqwest::Client,
        site_origin: &str,
        proxy_path: &str,
        width: u32,
        quality: u8,
    ) -> CardResult<Self> {
        let endpoint = reqwest::Url::parse(site_origin)
            .and_then(|origin| origin.join(proxy_path))
            .map_err(|e| {
                CardError::validation(format!(
                    "invalid image proxy endpoint '{site_origin}{proxy_path}': {e}"
                ))
            })?;
        Ok(Self {
            client,
            endpoint,
            width,
            quality,
        })
    }

    /// `{endpoint}?url=<url>&w=<width>&q=<quality>`.
    pub fn proxy_url(&self, url: &str) -> reqwest::Url {
        let mut out = self.endpoint.clone();
        out.query_pairs_mut()
            .clear()
            .append_pair("url", url)
            .append_pair("w", &self.width.to_string())
            .append_pair("q", &self.quality.to_string());
        out
    }
}

#[async_trait]
impl FetchStrategy for ProxyFetch {
    fn name(&self) -> &'static str {
        "proxy"
    }

    fn accepts(&self, url: &str) -> bool {
        !is_data_uri(url)
    }

    async fn fetch(&self, url: &str) -> CardResult<Vec<u8>> {
        get_bytes(&self.client, self.proxy_url(url)).await
    }
}

/// Tries each accepting strategy in order; the first fetch that also decodes wins.
///
/// Every attempt is bounded by `timeout`. There are no retries: a failed
/// strategy moves on to the next one, and exhausting the chain yields
/// [`CardError::ImageLoad`].
#[derive(Clone)]
pub struct ImageLoader {
    strategies: Vec<Arc<dyn FetchStrategy>>,
    timeout: Duration,
}

impl std::fmt::Debug for ImageLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageLoader")
            .field(
                "strategies",
                &self.strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ImageLoader {
    /// Data URI, direct fetch, then image proxy.
    pub fn new(config: &CardConfig) -> CardResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("sharecard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CardError::validation(format!("failed to build http client: {e}")))?;
        let proxy = ProxyFetch::new(
            client.clone(),
            &config.site_origin,
            &config.proxy_path,
            config.proxy_width,
            config.proxy_quality,
        )?;
        let strategies: Vec<Arc<dyn FetchStrategy>> = vec![
            Arc::new(DataUriStrategy),
            Arc::new(DirectFetch::new(client)),
            Arc::new(proxy),
        ];
        Ok(Self::with_strategies(strategies, config.fetch_timeout()))
    }

    pub fn with_strategies(strategies: Vec<Arc<dyn FetchStrategy>>, timeout: Duration) -> Self {
        Self {
            strategies,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[tracing::instrument(skip(self, url), fields(url = %abbreviate(url)))]
    pub async fn load(&self, url: &str) -> CardResult<Bitmap> {
        let url = url.trim();
        if url.is_empty() {
            return Err(CardError::image_load(url, "empty url"));
        }

        let mut reasons = Vec::<String>::new();
        for strategy in self.strategies.iter().filter(|s| s.accepts(url)) {
            let attempt = async {
                let bytes = strategy.fetch(url).await?;
                decode_image(&bytes)
            };
            match tokio::time::timeout(self.timeout, attempt).await {
                Ok(Ok(bitmap)) => {
                    tracing::debug!(
                        strategy = strategy.name(),
                        width = bitmap.width,
                        height = bitmap.height,
                        "image loaded"
                    );
                    return Ok(bitmap);
                }
                Ok(Err(e)) => {
                    tracing::debug!(strategy = strategy.name(), error = %e, "image strategy failed");
                    reasons.push(format!("{}: {e}", strategy.name()));
                }
                Err(_) => {
                    tracing::debug!(strategy = strategy.name(), timeout = ?self.timeout, "image strategy timed out");
                    reasons.push(format!("{}: timed out after {:?}", strategy.name(), self.timeout));
                }
            }
        }

        if reasons.is_empty() {
            reasons.push("no strategy accepts this url".to_owned());
        }
        Err(CardError::image_load(url, reasons.join("; ")))
    }
}

/// Data URIs can be megabytes long; keep log fields short.
fn abbreviate(url: &str) -> String {
    const MAX: usize = 96;
    if url.chars().count() <= MAX {
        url.to_owned()
    } else {
        let head: String = url.chars().take(MAX).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;

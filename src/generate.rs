//! Batch orchestration: one post in, three encoded cards out.

use std::sync::Arc;

use crate::assets::loader::ImageLoader;
use crate::cards::CardContext;
use crate::cards::cta::{qr_style, render_cta};
use crate::cards::hero::{Cover, render_hero};
use crate::cards::summary::render_summary;
use crate::config::CardConfig;
use crate::foundation::core::{CARD_SIZE, CardKind};
use crate::foundation::error::CardResult;
use crate::palette;
use crate::post::ShareablePost;
use crate::qr::{QrCodeEncoder, QrEncoder};
use crate::surface::{Surface, SurfaceFactory};
use crate::text::fonts::FontGate;

/// One encoded card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedCard {
    pub kind: CardKind,
    /// Encoded image bytes (PNG for raster surfaces).
    pub bytes: Vec<u8>,
    /// `{slug}-{kind}.png`.
    pub file_name: String,
}

impl RenderedCard {
    pub fn new(kind: CardKind, post: &ShareablePost, bytes: Vec<u8>) -> Self {
        Self {
            kind,
            bytes,
            file_name: kind.file_name(&post.file_slug()),
        }
    }
}

/// The three cards of one post. Only ever produced complete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardSet {
    pub hero: RenderedCard,
    pub summary: RenderedCard,
    pub cta: RenderedCard,
}

impl CardSet {
    /// Cards in download order: hero, summary, cta.
    pub fn cards(&self) -> [&RenderedCard; 3] {
        [&self.hero, &self.summary, &self.cta]
    }

    pub fn get(&self, kind: CardKind) -> &RenderedCard {
        match kind {
            CardKind::Hero => &self.hero,
            CardKind::Summary => &self.summary,
            CardKind::Cta => &self.cta,
        }
    }
}

/// Renders share cards onto surfaces from `F`.
///
/// Surfaces are allocated after every suspension point of a render, so a
/// surface never lives across an `.await`.
pub struct CardGenerator<F: SurfaceFactory> {
    factory: F,
    loader: ImageLoader,
    qr: Arc<dyn QrEncoder>,
    fonts_ready: FontGate,
    config: Arc<CardConfig>,
}

impl<F: SurfaceFactory> std::fmt::Debug for CardGenerator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardGenerator")
            .field("loader", &self.loader)
            .field("fonts_ready", &self.fonts_ready.is_ready())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<F: SurfaceFactory> CardGenerator<F> {
    /// Generator with the default loader chain, the `qrcode` encoder and an open font gate.
    pub fn new(factory: F, config: CardConfig) -> CardResult<Self> {
        config.validate()?;
        let loader = ImageLoader::new(&config)?;
        Ok(Self {
            factory,
            loader,
            qr: Arc::new(QrCodeEncoder),
            fonts_ready: FontGate::ready(),
            config: Arc::new(config),
        })
    }

    pub fn with_loader(mut self, loader: ImageLoader) -> Self {
        self.loader = loader;
        self
    }

    pub fn with_qr_encoder(mut self, qr: Arc<dyn QrEncoder>) -> Self {
        self.qr = qr;
        self
    }

    /// Gate that [`Self::generate_all`] waits on before drawing.
    pub fn with_font_gate(mut self, gate: FontGate) -> Self {
        self.fonts_ready = gate;
        self
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn font_gate(&self) -> &FontGate {
        &self.fonts_ready
    }

    /// Render all three cards concurrently; any failure rejects the whole set.
    #[tracing::instrument(skip_all, fields(slug = %post.file_slug()))]
    pub async fn generate_all(&self, post: &ShareablePost, article_url: &str) -> CardResult<CardSet> {
        self.fonts_ready.wait().await;
        let (hero, summary, cta) = tokio::try_join!(
            self.generate_hero(post),
            self.generate_summary(post),
            self.generate_cta(post, article_url),
        )?;
        tracing::info!(
            hero = hero.bytes.len(),
            summary = summary.bytes.len(),
            cta = cta.bytes.len(),
            "card set rendered"
        );
        Ok(CardSet { hero, summary, cta })
    }

    /// Render one card by kind.
    pub async fn generate(
        &self,
        kind: CardKind,
        post: &ShareablePost,
        article_url: &str,
    ) -> CardResult<RenderedCard> {
        match kind {
            CardKind::Hero => self.generate_hero(post).await,
            CardKind::Summary => self.generate_summary(post).await,
            CardKind::Cta => self.generate_cta(post, article_url).await,
        }
    }

    /// Hero card. A cover that fails to load degrades to a flat fill.
    #[tracing::instrument(skip_all, fields(kind = "hero"))]
    pub async fn generate_hero(&self, post: &ShareablePost) -> CardResult<RenderedCard> {
        let cover = match post
            .featured_image_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
        {
            None => Cover::Absent,
            Some(url) => match self.loader.load(url).await {
                Ok(bitmap) => Cover::Loaded(bitmap),
                Err(e) => {
                    tracing::warn!(error = %e, "cover image unavailable, using flat background");
                    Cover::Failed
                }
            },
        };

        let cx = self.context(post);
        self.draw(CardKind::Hero, post, |s| render_hero(s, &cx, &cover))
    }

    #[tracing::instrument(skip_all, fields(kind = "summary"))]
    pub async fn generate_summary(&self, post: &ShareablePost) -> CardResult<RenderedCard> {
        let cx = self.context(post);
        self.draw(CardKind::Summary, post, |s| render_summary(s, &cx))
    }

    /// CTA card. A QR encoding failure degrades to the URL drawn as text.
    #[tracing::instrument(skip_all, fields(kind = "cta"))]
    pub async fn generate_cta(&self, post: &ShareablePost, article_url: &str) -> CardResult<RenderedCard> {
        let cx = self.context(post);
        let qr = match self.qr.encode(article_url, &qr_style(&cx)) {
            Ok(bitmap) => Some(bitmap),
            Err(e) => {
                tracing::warn!(error = %e, "qr code unavailable, drawing url text");
                None
            }
        };
        self.draw(CardKind::Cta, post, |s| render_cta(s, &cx, article_url, qr.as_ref()))
    }

    fn context<'a>(&'a self, post: &'a ShareablePost) -> CardContext<'a> {
        CardContext::new(
            post,
            palette::resolve(post.color_palette.as_deref()),
            &self.config,
        )
    }

    fn draw(
        &self,
        kind: CardKind,
        post: &ShareablePost,
        paint: impl FnOnce(&mut F::Surface) -> CardResult<()>,
    ) -> CardResult<RenderedCard> {
        let mut surface = self.factory.create(kind, CARD_SIZE, CARD_SIZE)?;
        paint(&mut surface)?;
        let bytes = surface.finish()?;
        tracing::debug!(%kind, bytes = bytes.len(), "card encoded");
        Ok(RenderedCard::new(kind, post, bytes))
    }
}

#[cfg(test)]
#[path = "../tests/unit/generate.rs"]
mod tests;

//! QR code generation for the CTA card.

use qrcode::render::Renderer;
use qrcode::{Color, EcLevel, QrCode};

use crate::assets::bitmap::{Bitmap, premultiply_rgba8_in_place};
use crate::foundation::core::Rgba8;
use crate::foundation::error::{CardError, CardResult};

/// Appearance of a generated QR code.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QrStyle {
    /// Output edge length in pixels.
    pub size_px: u32,
    pub foreground: Rgba8,
    pub background: Rgba8,
    /// Quiet zone width in modules.
    pub margin_modules: u32,
}

/// Encodes a payload into a drawable QR bitmap.
pub trait QrEncoder: Send + Sync {
    fn encode(&self, payload: &str, style: &QrStyle) -> CardResult<Bitmap>;
}

/// `qrcode`-backed encoder at error-correction level M.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrCodeEncoder;

impl QrEncoder for QrCodeEncoder {
    fn encode(&self, payload: &str, style: &QrStyle) -> CardResult<Bitmap> {
        if payload.is_empty() {
            return Err(CardError::qr("empty payload"));
        }
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)
            .map_err(|e| CardError::qr(format!("failed to encode payload: {e}")))?;
        let modules = code.width() as u32;
        let colors = code.to_colors();
        render_modules(&colors, modules, style)
    }
}

/// Render a square module grid into a `size_px` bitmap with whole-pixel
/// modules, centered on the background color.
pub fn render_modules(colors: &[Color], modules: u32, style: &QrStyle) -> CardResult<Bitmap> {
    if modules == 0 || colors.len() != (modules as usize) * (modules as usize) {
        return Err(CardError::qr("module grid size mismatch"));
    }
    if style.size_px < modules + 2 * style.margin_modules {
        return Err(CardError::qr(format!(
            "{}px is too small for a {modules}-module code",
            style.size_px
        )));
    }

    let rgba = |c: Rgba8| image::Rgba([c.r, c.g, c.b, c.a]);
    let code = Renderer::<image::Rgba<u8>>::new(colors, modules as usize, style.margin_modules)
        .dark_color(rgba(style.foreground))
        .light_color(rgba(style.background))
        .max_dimensions(style.size_px, style.size_px)
        .build();

    let mut canvas = image::RgbaImage::from_pixel(style.size_px, style.size_px, rgba(style.background));
    let offset = i64::from((style.size_px - code.width()) / 2);
    image::imageops::replace(&mut canvas, &code, offset, offset);

    let mut bytes = canvas.into_raw();
    premultiply_rgba8_in_place(&mut bytes);
    Bitmap::from_premul(style.size_px, style.size_px, bytes)
}

#[cfg(test)]
#[path = "../tests/unit/qr.rs"]
mod tests;

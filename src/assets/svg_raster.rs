use crate::assets::bitmap::{Bitmap, MAX_BITMAP_DIM};
use crate::foundation::error::{CardError, CardResult};

/// Parse SVG bytes and rasterize them at their intrinsic size.
///
/// Output is premultiplied RGBA8, which is what `tiny_skia` produces natively.
pub(crate) fn rasterize_svg_bytes(bytes: &[u8]) -> CardResult<Bitmap> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts)
        .map_err(|e| CardError::validation(format!("parse svg tree: {e}")))?;

    fn to_px(v: f32) -> CardResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(CardError::validation("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    let size = tree.size();
    let w = to_px(size.width())?;
    let h = to_px(size.height())?;
    if w > MAX_BITMAP_DIM || h > MAX_BITMAP_DIM {
        return Err(CardError::validation(format!(
            "svg raster size too large: {w}x{h} (max {MAX_BITMAP_DIM}x{MAX_BITMAP_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(w, h)
        .ok_or_else(|| CardError::render("failed to allocate svg pixmap"))?;
    let sx = (w as f32) / size.width();
    let sy = (h as f32) / size.height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );
    Bitmap::from_premul(w, h, pixmap.data().to_vec())
}

use std::borrow::Cow;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{CardError, CardResult};
use crate::text::fonts::{FontBook, FontSpec};

/// RGBA8 brush color carried through Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Parley contexts preloaded with every face of a [`FontBook`].
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    book: FontBook,
}

impl TextLayoutEngine {
    pub(crate) fn new(book: &FontBook) -> Self {
        let mut font_ctx = parley::FontContext::default();
        for face in book.faces() {
            font_ctx.collection.register_fonts(
                parley::fontique::Blob::from(face.data.as_ref().clone()),
                None,
            );
        }
        Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            book: book.clone(),
        }
    }

    pub(crate) fn has_fonts(&self) -> bool {
        !self.book.is_empty()
    }

    /// Shape `text` as a single unbroken line.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        font: &FontSpec,
        brush: TextBrushRgba8,
    ) -> CardResult<parley::Layout<TextBrushRgba8>> {
        if !font.size_px.is_finite() || font.size_px <= 0.0 {
            return Err(CardError::validation("text size_px must be finite and > 0"));
        }
        let family = self
            .book
            .resolve_family(&font.family)
            .ok_or_else(|| CardError::font("no typeface registered"))?
            .to_owned();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(font.weight.value()),
        ));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Advance width of `text` on one line.
    pub(crate) fn measure(&mut self, text: &str, font: &FontSpec) -> CardResult<f64> {
        if text.is_empty() {
            return Ok(0.0);
        }
        let layout = self.layout_line(text, font, TextBrushRgba8::default())?;
        Ok(f64::from(layout.full_width()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;

use crate::foundation::error::{CardError, CardResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Edge length of every card, in pixels.
pub const CARD_SIZE: u32 = 1080;

/// The three card compositions produced for a post.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    /// Cover image, category badge and title.
    Hero,
    /// Title, excerpt and tag chips.
    Summary,
    /// Wordmark, call-to-action copy and QR code.
    Cta,
}

impl CardKind {
    /// All kinds in batch order.
    pub const ALL: [CardKind; 3] = [CardKind::Hero, CardKind::Summary, CardKind::Cta];

    /// Stable lowercase name used in file names and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            CardKind::Hero => "hero",
            CardKind::Summary => "summary",
            CardKind::Cta => "cta",
        }
    }

    /// File name for this card kind: `{slug}-{kind}.png`.
    pub fn file_name(self, slug: &str) -> String {
        format!("{slug}-{}.png", self.as_str())
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CardKind {
    type Err = CardError;

    fn from_str(s: &str) -> CardResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hero" => Ok(CardKind::Hero),
            "summary" => Ok(CardKind::Summary),
            "cta" => Ok(CardKind::Cta),
            other => Err(CardError::validation(format!(
                "unknown card kind \"{other}\" (expected hero, summary or cta)"
            ))),
        }
    }
}

/// Opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Construct from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, case-insensitive).
    pub fn from_hex(s: &str) -> CardResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return Err(CardError::validation(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }

        fn hex_byte(pair: &str) -> CardResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| CardError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        Ok(Self::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        ))
    }

    /// Lighten every channel by `round(2.55 * percent)`, clamped to `0..=255`.
    ///
    /// Negative percentages darken.
    pub fn lighten(self, percent: f64) -> Self {
        let amt = (2.55 * percent).round() as i32;
        let ch = |c: u8| -> u8 { (i32::from(c) + amt).clamp(0, 255) as u8 };
        Self::new(ch(self.r), ch(self.g), ch(self.b))
    }

    /// Attach a straight alpha in `0.0..=1.0`.
    pub fn alpha(self, a: f32) -> Rgba8 {
        let a = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba8::new(self.r, self.g, self.b, a)
    }

    /// Fully opaque RGBA.
    pub fn opaque(self) -> Rgba8 {
        Rgba8::new(self.r, self.g, self.b, 255)
    }

    /// `#rrggbb` representation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Construct from straight channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Premultiplied channel bytes `[r*a, g*a, b*a, a]`.
    pub fn to_premul(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }

    /// Linear interpolation in straight-alpha space.
    pub fn lerp(self, other: Rgba8, t: f64) -> Rgba8 {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let af = f64::from(a);
            let bf = f64::from(b);
            (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgba8::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

impl From<Rgb> for Rgba8 {
    fn from(c: Rgb) -> Self {
        c.opaque()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

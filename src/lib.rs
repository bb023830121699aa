//! sharecard renders the three 1080x1080 social share cards of a post.
//!
//! - Describe the post with a [`ShareablePost`]
//! - Build a [`CardGenerator`] over a [`SurfaceFactory`] ([`CpuSurfaceFactory`] for PNGs)
//! - Call [`CardGenerator::generate_all`] and optionally [`save_all`] the result
#![forbid(unsafe_code)]

mod foundation;

pub mod assets;
pub mod cards;
pub mod config;
pub mod download;
pub mod generate;
pub mod paint;
pub mod palette;
pub mod post;
pub mod qr;
pub mod shapes;
pub mod surface;
pub mod text;

pub use crate::foundation::core::{Affine, BezPath, CARD_SIZE, CardKind, Point, Rect, Rgb, Rgba8, Vec2};
pub use crate::foundation::error::{CardError, CardResult};

pub use crate::assets::bitmap::{Bitmap, decode_image};
pub use crate::assets::loader::{FetchStrategy, ImageLoader};
pub use crate::config::CardConfig;
pub use crate::download::{save_all, save_card};
pub use crate::generate::{CardGenerator, CardSet, RenderedCard};
pub use crate::palette::CardPalette;
pub use crate::post::ShareablePost;
pub use crate::qr::{QrCodeEncoder, QrEncoder, QrStyle};
pub use crate::surface::cpu::{CpuSurface, CpuSurfaceFactory};
pub use crate::surface::record::{DrawOp, RecordingSurface, RecordingSurfaceFactory};
pub use crate::surface::{Surface, SurfaceFactory, TextMeasure};
pub use crate::text::fonts::{FontBook, FontGate};

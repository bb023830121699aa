use std::path::Path;
use std::sync::Arc;

use tokio::sync::watch;

use crate::foundation::error::{CardError, CardResult};

/// Weight of a text layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Regular,
    Semibold,
    Bold,
    Black,
}

impl Weight {
    /// CSS-style numeric weight.
    pub fn value(self) -> f32 {
        match self {
            Weight::Regular => 400.0,
            Weight::Semibold => 600.0,
            Weight::Bold => 700.0,
            Weight::Black => 900.0,
        }
    }
}

/// Font selection for one text draw: family, pixel size, weight.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FontSpec {
    /// Requested family; unknown names resolve to the first registered family.
    pub family: Arc<str>,
    /// Em size in pixels.
    pub size_px: f32,
    pub weight: Weight,
}

impl FontSpec {
    pub fn new(family: impl Into<Arc<str>>, size_px: f32, weight: Weight) -> Self {
        Self {
            family: family.into(),
            size_px,
            weight,
        }
    }

    /// Bold weight shorthand.
    pub fn bold(family: impl Into<Arc<str>>, size_px: f32) -> Self {
        Self::new(family, size_px, Weight::Bold)
    }

    pub fn regular(family: impl Into<Arc<str>>, size_px: f32) -> Self {
        Self::new(family, size_px, Weight::Regular)
    }
}

/// One registered typeface file.
#[derive(Clone, Debug)]
pub struct FontFace {
    /// Family name read from the font's name table.
    pub family: String,
    /// Raw font file bytes.
    pub data: Arc<Vec<u8>>,
}

/// Typefaces available to raster surfaces.
///
/// Registration reads the family names out of each file so renderers can ask
/// for a family by name; the first registered family doubles as the fallback.
#[derive(Clone, Debug, Default)]
pub struct FontBook {
    faces: Vec<FontFace>,
}

impl FontBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a font file (TTF/OTF/TTC) and return the family names it provides.
    pub fn register(&mut self, bytes: Vec<u8>) -> CardResult<Vec<String>> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        if families.is_empty() {
            return Err(CardError::font("no font families registered from font bytes"));
        }

        let data = Arc::new(bytes);
        let mut names = Vec::with_capacity(families.len());
        for (id, _) in families {
            let name = font_ctx
                .collection
                .family_name(id)
                .ok_or_else(|| CardError::font("registered font family has no name"))?
                .to_string();
            if !names.contains(&name) {
                names.push(name.clone());
            }
            self.faces.push(FontFace {
                family: name,
                data: Arc::clone(&data),
            });
        }
        tracing::debug!(families = ?names, "registered typeface");
        Ok(names)
    }

    /// Read and register a single font file.
    pub fn register_file(&mut self, path: impl AsRef<Path>) -> CardResult<Vec<String>> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            CardError::font(format!("failed to read font '{}': {e}", path.display()))
        })?;
        self.register(bytes)
    }

    /// Register every `.ttf`, `.otf` and `.ttc` file in `dir` (non-recursive, sorted by name).
    pub fn register_dir(&mut self, dir: impl AsRef<Path>) -> CardResult<usize> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|e| {
            CardError::font(format!("failed to list fonts in '{}': {e}", dir.display()))
        })?;
        let mut paths = entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| {
                p.extension()
                    .and_then(|x| x.to_str())
                    .map(|x| matches!(x.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc"))
                    .unwrap_or(false)
            })
            .collect::<Vec<_>>();
        paths.sort();

        for p in &paths {
            self.register_file(p)?;
        }
        Ok(paths.len())
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn faces(&self) -> &[FontFace] {
        &self.faces
    }

    /// Registered family names, deduplicated, in registration order.
    pub fn families(&self) -> Vec<&str> {
        let mut out = Vec::<&str>::new();
        for f in &self.faces {
            if !out.contains(&f.family.as_str()) {
                out.push(f.family.as_str());
            }
        }
        out
    }

    /// Return `family` when registered (case-insensitive), else the first registered family.
    pub fn resolve_family(&self, family: &str) -> Option<&str> {
        self.faces
            .iter()
            .find(|f| f.family.eq_ignore_ascii_case(family))
            .or_else(|| self.faces.first())
            .map(|f| f.family.as_str())
    }
}

/// Readiness signal for typeface registration.
///
/// Batch generation waits on the gate before drawing any text; callers mark it
/// ready once every required typeface is in the [`FontBook`]. Waiting on a gate
/// that is already open returns immediately.
#[derive(Clone, Debug)]
pub struct FontGate {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for FontGate {
    fn default() -> Self {
        Self::new()
    }
}

impl FontGate {
    /// A closed gate.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// An already-open gate.
    pub fn ready() -> Self {
        let gate = Self::new();
        gate.mark_ready();
        gate
    }

    pub fn mark_ready(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_ready(&self) -> bool {
        *self.tx.borrow()
    }

    pub async fn wait(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = rx.wait_for(|ready| *ready).await;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;

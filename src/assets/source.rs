use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    assets::bitmap::Bitmap,
    foundation::core::Rgb8,
    foundation::error::{ClockError, ClockResult},
    glyph::{id::GlyphId, tables::glyph_stem},
    theme::{BACKGROUND_MARKER, INK_MARKER},
};

/// Host capability: turn a glyph id into a freshly owned bitmap.
///
/// Release is `Drop`: whoever holds the returned bitmap owns it exclusively.
pub trait GlyphSource {
    /// Load the image for `glyph`. Never called with [`GlyphId::BLANK`].
    fn load(&mut self, glyph: GlyphId) -> ClockResult<Bitmap>;
}

impl<S: GlyphSource + ?Sized> GlyphSource for &mut S {
    fn load(&mut self, glyph: GlyphId) -> ClockResult<Bitmap> {
        (**self).load(glyph)
    }
}

/// Glyphs held in memory, e.g. baked into the binary or generated in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryGlyphSource {
    glyphs: HashMap<GlyphId, Bitmap>,
}

impl MemoryGlyphSource {
    /// Empty source; every load fails until glyphs are inserted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a glyph image.
    pub fn insert(&mut self, glyph: GlyphId, bitmap: Bitmap) {
        self.glyphs.insert(glyph, bitmap);
    }

    /// Builder form of [`MemoryGlyphSource::insert`].
    pub fn with(mut self, glyph: GlyphId, bitmap: Bitmap) -> Self {
        self.insert(glyph, bitmap);
        self
    }
}

impl GlyphSource for MemoryGlyphSource {
    fn load(&mut self, glyph: GlyphId) -> ClockResult<Bitmap> {
        self.glyphs
            .get(&glyph)
            .cloned()
            .ok_or_else(|| ClockError::resource_load(format!("no image for {glyph:?}")))
    }
}

/// Loads `<dir>/<stem>.png` for each glyph, e.g. `glyphs/u10.png`.
#[derive(Clone, Debug)]
pub struct DirGlyphSource {
    root: PathBuf,
}

impl DirGlyphSource {
    /// Source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path a glyph is read from; `None` for blank or unknown ids.
    pub fn path_for(&self, glyph: GlyphId) -> Option<PathBuf> {
        glyph_stem(glyph).map(|stem| self.root.join(format!("{stem}.png")))
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl GlyphSource for DirGlyphSource {
    fn load(&mut self, glyph: GlyphId) -> ClockResult<Bitmap> {
        let path = self
            .path_for(glyph)
            .ok_or_else(|| ClockError::resource_load(format!("{glyph:?} has no resource")))?;
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read glyph image {}", path.display()))
            .map_err(|e| ClockError::resource_load(format!("{e:#}")))?;
        decode_glyph(&bytes)
            .map_err(|e| ClockError::resource_load(format!("{}: {e}", path.display())))
    }
}

/// Decode encoded image bytes into a one-bit glyph.
///
/// Images with an alpha channel set pixels whose alpha is at least one half.
/// Opaque images set their dark pixels instead. The set color is taken from
/// the first set pixel; clear pixels get the background marker.
pub fn decode_glyph(bytes: &[u8]) -> ClockResult<Bitmap> {
    let dyn_img = image::load_from_memory(bytes).context("decode glyph image from memory")?;
    let has_alpha = dyn_img.color().has_alpha();
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let is_set = |px: &image::Rgba<u8>| {
        let [r, g, b, a] = px.0;
        if has_alpha {
            a >= 128
        } else {
            Rgb8::new(r, g, b).luma() < 128
        }
    };
    let ink = rgba
        .pixels()
        .find(|px| is_set(px))
        .map(|px| Rgb8::new(px.0[0], px.0[1], px.0[2]))
        .unwrap_or(INK_MARKER);

    Ok(Bitmap::from_fn(
        width,
        height,
        [BACKGROUND_MARKER, ink],
        |x, y| is_set(rgba.get_pixel(x, y)),
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;

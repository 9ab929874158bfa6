use std::fmt;

/// Opaque identifier of a static glyph image, or [`GlyphId::BLANK`].
///
/// The raw value is a resource number; `0` is reserved for "show nothing".
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GlyphId(u16);

impl GlyphId {
    /// The slot shows nothing.
    pub const BLANK: Self = Self(0);

    /// Wrap a raw resource number.
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// The raw resource number.
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Whether this is the blank glyph.
    pub const fn is_blank(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for GlyphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::glyph::tables::{glyph_char, glyph_stem};
        match glyph_stem(*self) {
            Some(stem) => match glyph_char(*self) {
                Some(ch) => write!(f, "GlyphId({stem} {ch})"),
                None => write!(f, "GlyphId({stem})"),
            },
            None if self.is_blank() => f.write_str("GlyphId(blank)"),
            None => write!(f, "GlyphId(#{})", self.0),
        }
    }
}

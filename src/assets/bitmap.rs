use crate::foundation::core::Rgb8;

/// Palette index of clear pixels.
pub const PALETTE_CLEAR: usize = 0;
/// Palette index of set pixels.
pub const PALETTE_SET: usize = 1;

/// One-bit-per-pixel glyph image with a two-entry indexed palette.
///
/// Pixels are packed row-major, most significant bit first; every row
/// starts on a byte boundary (`stride` bytes per row) and padding bits are
/// always zero, so two bitmaps showing the same picture compare equal.
///
/// The palette is kept twice: `source_palette` is what the image was loaded
/// with (placeholder markers included) and `palette` is what gets drawn.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    stride: usize,
    pixels: Vec<u8>,
    source_palette: [Rgb8; 2],
    palette: [Rgb8; 2],
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("set_pixels", &self.count_set())
            .field("palette", &self.palette)
            .finish()
    }
}

impl Bitmap {
    /// All-clear bitmap.
    pub fn new(width: u32, height: u32, palette: [Rgb8; 2]) -> Self {
        let stride = (width as usize).div_ceil(8);
        Self {
            width,
            height,
            stride,
            pixels: vec![0; stride * height as usize],
            source_palette: palette,
            palette,
        }
    }

    /// Build from a per-pixel predicate.
    pub fn from_fn(
        width: u32,
        height: u32,
        palette: [Rgb8; 2],
        mut f: impl FnMut(u32, u32) -> bool,
    ) -> Self {
        let mut bmp = Self::new(width, height, palette);
        for y in 0..height {
            for x in 0..width {
                if f(x, y) {
                    bmp.set(x, y, true);
                }
            }
        }
        bmp
    }

    /// An all-clear bitmap with this one's size and palettes.
    pub fn cleared(&self) -> Self {
        Self {
            pixels: vec![0; self.pixels.len()],
            ..self.clone()
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Packed pixel rows.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Whether both bitmaps share width and height.
    pub fn same_size(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Pixel at `(x, y)`; out-of-bounds reads are clear.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let (byte, mask) = self.locate(x, y);
        self.pixels[byte] & mask != 0
    }

    /// Set or clear the pixel at `(x, y)`; out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, on: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let (byte, mask) = self.locate(x, y);
        if on {
            self.pixels[byte] |= mask;
        } else {
            self.pixels[byte] &= !mask;
        }
    }

    /// Number of set pixels.
    pub fn count_set(&self) -> u32 {
        self.pixels.iter().map(|b| b.count_ones()).sum()
    }

    /// Colors as loaded, placeholders included.
    pub fn source_palette(&self) -> [Rgb8; 2] {
        self.source_palette
    }

    /// Colors as drawn.
    pub fn palette(&self) -> [Rgb8; 2] {
        self.palette
    }

    pub(crate) fn set_palette(&mut self, palette: [Rgb8; 2]) {
        self.palette = palette;
    }

    /// Color of the pixel at `(x, y)`.
    pub fn color_at(&self, x: u32, y: u32) -> Rgb8 {
        if self.get(x, y) {
            self.palette[PALETTE_SET]
        } else {
            self.palette[PALETTE_CLEAR]
        }
    }

    fn locate(&self, x: u32, y: u32) -> (usize, u8) {
        let byte = y as usize * self.stride + (x / 8) as usize;
        (byte, 0x80 >> (x % 8))
    }

}

#[cfg(test)]
#[path = "../../tests/unit/assets/bitmap.rs"]
mod tests;

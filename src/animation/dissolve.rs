use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    assets::bitmap::Bitmap,
    foundation::error::{ClockError, ClockResult},
    foundation::math::pixel_noise,
    glyph::id::GlyphId,
    slot::kind::ColorRole,
    theme::{ThemeColors, colorize},
};

/// Number of blend steps before the new image is forced in.
pub const DISSOLVE_STEPS: u32 = 10;
/// Delay between two dissolve steps.
pub const DISSOLVE_INTERVAL: Duration = Duration::from_millis(10);

/// How a disagreeing pixel decides whether it already shows the new image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DissolvePattern {
    /// Ordered 4×4 Bayer threshold. A pixel flips once and stays flipped.
    #[default]
    Dither,
    /// Independent pseudo-random draw per pixel and step.
    Noise,
}

const BAYER_4X4: [[u8; 4]; 4] = [[0, 8, 2, 10], [12, 4, 14, 6], [3, 11, 1, 9], [15, 7, 13, 5]];

impl DissolvePattern {
    fn shows_new(self, x: u32, y: u32, index: usize, step: u32, seed: u64) -> bool {
        match self {
            // threshold / 16 < step / STEPS
            Self::Dither => {
                let threshold = u32::from(BAYER_4X4[(y % 4) as usize][(x % 4) as usize]);
                threshold * DISSOLVE_STEPS < 16 * step
            }
            // draw / 256 < step / STEPS
            Self::Noise => u32::from(pixel_noise(seed, step, index)) * DISSOLVE_STEPS < 256 * step,
        }
    }
}

/// Blend `from` and `to` into `live` at `step / DISSOLVE_STEPS` progress.
///
/// Bytes where both images agree are copied straight through; only
/// disagreeing bits consult the pattern.
pub fn blend_step(
    live: &mut Bitmap,
    from: &Bitmap,
    to: &Bitmap,
    step: u32,
    pattern: DissolvePattern,
    seed: u64,
) -> ClockResult<()> {
    if !(live.same_size(from) && live.same_size(to)) {
        return Err(ClockError::invalid_input(
            "dissolve buffers must share one size",
        ));
    }

    let stride = from.stride();
    let width = from.width();
    let (src, dst) = (from.pixels(), to.pixels());
    for (i, out) in live.pixels_mut().iter_mut().enumerate() {
        let (a, b) = (src[i], dst[i]);
        let diff = a ^ b;
        if diff == 0 {
            *out = a;
            continue;
        }

        let y = (i / stride) as u32;
        let x0 = ((i % stride) * 8) as u32;
        let mut byte = a & !diff;
        for bit in 0..8u32 {
            let mask = 0x80u8 >> bit;
            if diff & mask == 0 {
                continue;
            }
            let x = x0 + bit;
            let index = y as usize * width as usize + x as usize;
            let pick = if pattern.shows_new(x, y, index, step, seed) {
                b
            } else {
                a
            };
            byte |= pick & mask;
        }
        *out = byte;
    }
    Ok(())
}

/// An in-flight dissolve: private snapshots of both sides plus progress.
#[derive(Clone, Debug)]
pub struct Dissolve {
    from: Bitmap,
    to: Bitmap,
    from_blank: bool,
    to_blank: bool,
    target: GlyphId,
    step: u32,
    pattern: DissolvePattern,
    seed: u64,
}

impl Dissolve {
    /// Start a dissolve towards `target`. A `None` side is treated as an
    /// all-clear image the size of the other side.
    ///
    /// Returns the snapshots unchanged when both sides are blank or their
    /// sizes differ, since there is nothing to blend.
    pub fn new(
        from: Option<Bitmap>,
        to: Option<Bitmap>,
        target: GlyphId,
        pattern: DissolvePattern,
        seed: u64,
    ) -> Result<Self, (Option<Bitmap>, Option<Bitmap>)> {
        let (from_blank, to_blank) = (from.is_none(), to.is_none());
        let (from, to) = match (from, to) {
            (Some(f), Some(t)) if f.same_size(&t) => (f, t),
            (Some(f), None) => {
                let t = f.cleared();
                (f, t)
            }
            (None, Some(t)) => {
                let f = t.cleared();
                (f, t)
            }
            other => return Err(other),
        };
        Ok(Self {
            from,
            to,
            from_blank,
            to_blank,
            target,
            step: 0,
            pattern,
            seed,
        })
    }

    /// Steps taken so far.
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Whether the final step has run.
    pub fn is_finished(&self) -> bool {
        self.step >= DISSOLVE_STEPS
    }

    /// Glyph being dissolved to.
    pub fn target(&self) -> GlyphId {
        self.target
    }

    /// Old side snapshot.
    pub fn from(&self) -> &Bitmap {
        &self.from
    }

    /// New side snapshot.
    pub fn to(&self) -> &Bitmap {
        &self.to
    }

    /// Live buffer to display before the first step.
    pub fn initial_frame(&self) -> Bitmap {
        self.from.clone()
    }

    /// Advance one step into `live`. Returns `true` once finished; the final
    /// step overwrites `live` with the new snapshot verbatim.
    pub fn advance(&mut self, live: &mut Bitmap) -> ClockResult<bool> {
        if self.is_finished() {
            return Ok(true);
        }
        self.step += 1;
        if self.is_finished() {
            live.clone_from(&self.to);
            return Ok(true);
        }
        blend_step(
            live,
            &self.from,
            &self.to,
            self.step,
            self.pattern,
            self.seed,
        )?;
        Ok(false)
    }

    /// Re-apply theme colors to both snapshots.
    pub fn recolor(&mut self, role: ColorRole, colors: &ThemeColors) {
        colorize(&mut self.from, role, colors);
        colorize(&mut self.to, role, colors);
    }

    /// Abandon the dissolve and hand back the old side, `None` if it was blank.
    pub fn into_source(self) -> Option<Bitmap> {
        (!self.from_blank).then_some(self.from)
    }

    /// Finish the dissolve at once and hand back the new side, `None` if blank.
    pub fn into_target(self) -> Option<Bitmap> {
        (!self.to_blank).then_some(self.to)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/dissolve.rs"]
mod tests;

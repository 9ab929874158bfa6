/// SplitMix64 stream. Small, seedable and identical on every platform.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

/// Stateless per-pixel draw in `0..=255`, keyed by `(seed, step, index)`.
pub(crate) fn pixel_noise(seed: u64, step: u32, index: usize) -> u8 {
    let key = seed
        ^ u64::from(step).wrapping_mul(0xD6E8_FEB8_6659_FD93)
        ^ (index as u64).wrapping_mul(0xA076_1D64_78BD_642F);
    (Rng64::new(key).next_u64() >> 56) as u8
}

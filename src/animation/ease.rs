/// Easing curve handed to the host's geometric animation primitive.
///
/// Hosts evaluate it through [`GeometricAnimation::frame_at`](crate::host::GeometricAnimation::frame_at).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Cubic acceleration, used when a glyph leaves its slot.
    EaseIn,
    /// Cubic deceleration, used when a glyph settles into its slot.
    EaseOut,
}

impl Ease {
    /// Map linear progress `t` to eased progress. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::EaseIn => t * t * t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

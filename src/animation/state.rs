//! Per-slot animation states and the pure decisions that drive them.

use serde::{Deserialize, Serialize};

use crate::{animation::dissolve::Dissolve, glyph::id::GlyphId, host::AnimationHandle};

/// How a slot swaps one glyph for another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionStyle {
    /// Slide the old glyph out, then the new one in, via the host primitive.
    #[default]
    Slide,
    /// Pixel-domain dissolve stepped by the frame scheduler.
    Dissolve,
    /// Swap with no transition.
    Instant,
}

/// What a slot is doing right now. At most one non-idle state per slot.
#[derive(Debug, Default)]
pub enum AnimationState {
    /// Settled.
    #[default]
    Idle,
    /// Old glyph sliding out; `target` is loaded when the slide completes.
    GeometricOut {
        /// Glyph to show once the old one has left.
        target: GlyphId,
        /// Host animation moving the old glyph.
        handle: AnimationHandle,
    },
    /// New glyph sliding into its home frame.
    GeometricIn {
        /// Host animation moving the new glyph.
        handle: AnimationHandle,
    },
    /// Dissolve stepped by the frame scheduler.
    DissolveRunning(Box<Dissolve>),
}

/// Data-free summary of [`AnimationState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Settled.
    Idle,
    /// Sliding out.
    GeometricOut,
    /// Sliding in.
    GeometricIn,
    /// Dissolving.
    Dissolving,
}

impl AnimationState {
    /// The state's phase.
    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::GeometricOut { .. } => Phase::GeometricOut,
            Self::GeometricIn { .. } => Phase::GeometricIn,
            Self::DissolveRunning(_) => Phase::Dissolving,
        }
    }

    /// Whether an animation is in flight.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// The transition to start once any in-flight one has been cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Start {
    /// Already showing the target.
    Nothing,
    /// Replace content in one go.
    Swap,
    /// Nothing to slide out; slide the target in.
    SlideIn,
    /// Slide the current content out first.
    SlideOut,
    /// Dissolve from current content to the target.
    Dissolve,
}

/// Decide how a settled slot reaches `target`.
pub fn plan_start(
    current: GlyphId,
    has_content: bool,
    target: GlyphId,
    style: TransitionStyle,
) -> Start {
    if current == target {
        return Start::Nothing;
    }
    match style {
        TransitionStyle::Instant => Start::Swap,
        TransitionStyle::Dissolve => Start::Dissolve,
        TransitionStyle::Slide if has_content => Start::SlideOut,
        TransitionStyle::Slide if target.is_blank() => Start::Swap,
        TransitionStyle::Slide => Start::SlideIn,
    }
}

/// What a geometric completion does to the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompletionStep {
    /// The token predates a cancellation or a later phase; drop it.
    Stale,
    /// The old glyph is gone; load the target and slide it in.
    BeginIn,
    /// The new glyph is home; settle.
    Settle,
}

/// Decide what a completion token carrying `token_generation` means for a
/// slot in `phase` at `slot_generation`.
pub fn plan_completion(phase: Phase, token_generation: u64, slot_generation: u64) -> CompletionStep {
    if token_generation != slot_generation {
        return CompletionStep::Stale;
    }
    match phase {
        Phase::GeometricOut => CompletionStep::BeginIn,
        Phase::GeometricIn => CompletionStep::Settle,
        Phase::Idle | Phase::Dissolving => CompletionStep::Stale,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;

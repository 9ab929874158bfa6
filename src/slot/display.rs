use crate::{
    animation::state::AnimationState,
    assets::bitmap::Bitmap,
    foundation::core::Rect,
    glyph::id::GlyphId,
    slot::{kind::SlotKind, layout::ScreenProfile},
};

/// One screen position: its glyph, its pixels and its animation state.
///
/// `glyph` always names either a settled glyph or the old side of the
/// transition in flight. `image` is exclusively owned by the slot.
#[derive(Debug)]
pub struct DisplaySlot {
    pub(crate) kind: SlotKind,
    pub(crate) home: Rect,
    pub(crate) frame: Rect,
    pub(crate) glyph: GlyphId,
    pub(crate) image: Option<Bitmap>,
    pub(crate) state: AnimationState,
    pub(crate) generation: u64,
    pub(crate) retired: bool,
}

impl DisplaySlot {
    /// Empty slot at its home frame.
    pub fn new(kind: SlotKind, home: Rect) -> Self {
        Self {
            kind,
            home,
            frame: home,
            glyph: GlyphId::BLANK,
            image: None,
            state: AnimationState::Idle,
            generation: 0,
            retired: false,
        }
    }

    /// Which slot this is.
    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    /// Resting frame.
    pub fn home(&self) -> Rect {
        self.home
    }

    /// Frame the content currently occupies; differs from `home` only while sliding.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Settled glyph, or the old side of an in-flight transition.
    pub fn glyph(&self) -> GlyphId {
        self.glyph
    }

    /// Live pixels; `None` when the slot shows nothing.
    pub fn image(&self) -> Option<&Bitmap> {
        self.image.as_ref()
    }

    /// Animation state.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Bumped whenever an animation is armed or cancelled.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.state.is_active()
    }

    /// Whether the slot has been torn down.
    pub fn is_retired(&self) -> bool {
        self.retired
    }

    pub(crate) fn bump_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Frame the old glyph slides out to: one glyph height above home.
    pub(crate) fn exit_frame(&self) -> Rect {
        let h = self.home.height();
        Rect::new(self.home.x0, self.home.y0 - h, self.home.x1, self.home.y1 - h)
    }

    /// Frame the new glyph slides in from: one glyph height below home.
    pub(crate) fn entry_frame(&self) -> Rect {
        let h = self.home.height();
        Rect::new(self.home.x0, self.home.y0 + h, self.home.x1, self.home.y1 + h)
    }
}

/// Every slot of the face, keyed by [`SlotKind`].
#[derive(Debug)]
pub struct SlotRegistry {
    slots: [DisplaySlot; SlotKind::COUNT],
}

impl SlotRegistry {
    /// Empty slots laid out for `screen`.
    pub fn new(screen: ScreenProfile) -> Self {
        Self {
            slots: SlotKind::ALL.map(|kind| DisplaySlot::new(kind, screen.slot_frame(kind))),
        }
    }

    /// Slot by kind.
    pub fn get(&self, kind: SlotKind) -> &DisplaySlot {
        &self.slots[kind.index()]
    }

    /// Mutable slot by kind.
    pub fn get_mut(&mut self, kind: SlotKind) -> &mut DisplaySlot {
        &mut self.slots[kind.index()]
    }

    /// All slots in [`SlotKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &DisplaySlot> {
        self.slots.iter()
    }

    /// Mutable iteration in [`SlotKind::ALL`] order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut DisplaySlot> {
        self.slots.iter_mut()
    }

    /// Number of slots with a transition in flight.
    pub fn animating(&self) -> usize {
        self.slots.iter().filter(|s| s.is_animating()).count()
    }
}

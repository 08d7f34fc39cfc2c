use crate::core::CharacterSlot;

/// One visible character's animation clock: a stagger offset, a local span
/// and the progress computed from the global elapsed time. Built by
/// [`TimelineSet`](crate::TimelineSet) at rebuild and advanced every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharacterTimeline {
    index: usize,
    start_offset: f32,
    span: f32,
    play_forever: bool,
    progress: f32,
    slot: CharacterSlot,
}

impl CharacterTimeline {
    pub fn new(
        index: usize,
        start_offset: f32,
        span: f32,
        play_forever: bool,
        slot: CharacterSlot,
    ) -> Self {
        Self {
            index,
            start_offset,
            span,
            play_forever,
            progress: 0.0,
            slot,
        }
    }

    /// Recomputes progress from the global elapsed time. Zero before the
    /// stagger offset is reached; clamped to 1 unless playing forever, in
    /// which case the raw ratio is kept and may exceed 1.
    pub fn advance(&mut self, global_time: f32) -> f32 {
        self.progress = if global_time < self.start_offset {
            0.0
        } else {
            let raw = (global_time - self.start_offset) / self.span;
            if self.play_forever {
                raw
            } else {
                raw.clamp(0.0, 1.0)
            }
        };
        self.progress
    }

    /// Position among visible characters, not raw string index.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn start_offset(&self) -> f32 {
        self.start_offset
    }

    pub fn span(&self) -> f32 {
        self.span
    }

    /// The value computed by the last [`advance`](Self::advance) call.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn slot(&self) -> CharacterSlot {
        self.slot
    }
}

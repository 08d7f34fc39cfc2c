use crate::core::{BufferUpdate, CharacterSlot, GlyphQuad};

/// The collaborator boundary toward the host's text object: layout enumeration,
/// base geometry reads and live buffer writes. The host owns the buffers; the
/// core writes into them transiently during a modifier pass and never keeps a
/// reference across ticks.
pub trait TextTarget {
    /// True once text, layout and mesh data are all available. Polled once
    /// per tick; everything defers while this is false.
    fn is_ready(&self) -> bool;

    fn raw_text(&self) -> &str;

    /// Every character in layout order, visible or not. The timeline rebuild
    /// skips the invisible ones.
    fn character_slots(&self) -> Vec<CharacterSlot>;

    /// Recompute layout/mesh so a fresh snapshot can be taken.
    fn force_relayout(&mut self);

    /// Unmodified base geometry for one character.
    fn base_quad(&self, slot: CharacterSlot) -> GlyphQuad;

    /// Overwrites one character's live geometry/colors.
    fn write_quad(&mut self, slot: CharacterSlot, quad: GlyphQuad);

    /// Push the listed buffers to the renderer. Called at most once per
    /// modifier pass, and only when some modifier declared a write.
    fn commit(&mut self, update: BufferUpdate);

    /// Replace the text content; the caller is responsible for invalidating
    /// the timeline cache afterwards.
    fn set_raw_text(&mut self, text: &str);
}

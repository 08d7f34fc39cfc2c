use crate::{
    config::JuicerConfig, core::GlyphQuad, target::TextTarget, timeline::CharacterTimeline,
};

/// Owns the per-character timelines plus the baseline geometry snapshot the
/// modifier pipeline reads each tick. Rebuilt lazily: `mark_dirty` only sets
/// a flag, the actual work happens in [`rebuild_if_dirty`](Self::rebuild_if_dirty)
/// once the target is ready.
#[derive(Debug)]
pub struct TimelineSet {
    timelines: Vec<CharacterTimeline>,
    snapshot: Vec<GlyphQuad>,
    cached_text: String,
    total_span: f32,
    dirty: bool,
}

impl TimelineSet {
    pub fn new() -> Self {
        Self {
            timelines: Vec::new(),
            snapshot: Vec::new(),
            cached_text: String::new(),
            total_span: 0.0,
            dirty: true,
        }
    }

    /// Idempotent; consulted by the next `rebuild_if_dirty`.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Forces the next rebuild regardless of the cached text key. Used on
    /// configuration changes, where the text alone cannot tell the cache
    /// that its stagger offsets are stale.
    pub fn invalidate(&mut self) {
        self.cached_text.clear();
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn total_span(&self) -> f32 {
        self.total_span
    }

    pub fn timelines(&self) -> &[CharacterTimeline] {
        &self.timelines
    }

    pub fn snapshot(&self) -> &[GlyphQuad] {
        &self.snapshot
    }

    pub fn cached_text(&self) -> &str {
        &self.cached_text
    }

    /// Rebuilds timelines and snapshot if needed. Returns whether a rebuild
    /// ran.
    ///
    /// An unready target defers the whole thing: the dirty flag stays set
    /// and the call is retried next tick. A dirty flag with unchanged text
    /// clears the flag without rebuilding; callers mark dirty defensively
    /// and the text key is the cheap gate that keeps that from reallocating
    /// every frame.
    #[tracing::instrument(skip(self, target, config))]
    pub fn rebuild_if_dirty(&mut self, target: &mut dyn TextTarget, config: &JuicerConfig) -> bool {
        if !self.dirty {
            return false;
        }
        if !target.is_ready() {
            return false;
        }

        let mut rebuilt = false;
        if self.cached_text.is_empty() || self.cached_text != target.raw_text() {
            self.rebuild(target, config);
            rebuilt = true;
        }
        self.dirty = false;
        rebuilt
    }

    fn rebuild(&mut self, target: &mut dyn TextTarget, config: &JuicerConfig) {
        target.force_relayout();

        self.timelines.clear();
        self.snapshot.clear();
        let mut index = 0usize;
        for slot in target.character_slots() {
            if !slot.visible {
                continue;
            }
            self.timelines.push(CharacterTimeline::new(
                index,
                config.delay * index as f32,
                config.duration,
                config.play_forever,
                slot,
            ));
            self.snapshot.push(target.base_quad(slot));
            index += 1;
        }

        self.total_span = config.duration + self.timelines.len() as f32 * config.delay;
        self.cached_text = target.raw_text().to_string();
        tracing::debug!(
            characters = self.timelines.len(),
            total_span = self.total_span,
            "rebuilt character timelines"
        );
    }

    /// Recomputes every character's progress from the global elapsed time.
    pub fn advance_all(&mut self, elapsed: f32) {
        for tl in &mut self.timelines {
            tl.advance(elapsed);
        }
    }
}

impl Default for TimelineSet {
    fn default() -> Self {
        Self::new()
    }
}

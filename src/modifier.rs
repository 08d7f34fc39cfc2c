use crate::{
    core::{BufferUpdate, GlyphQuad},
    target::TextTarget,
    timeline::CharacterTimeline,
    timeline_set::TimelineSet,
};

/// Read-only per-character context handed to every modifier invocation.
#[derive(Clone, Copy, Debug)]
pub struct TextContext<'a> {
    /// The text the timelines were built from.
    pub text: &'a str,
    /// Number of visible characters.
    pub character_count: usize,
    /// The character's untouched snapshot quad. The live quad starts as a
    /// copy of this each tick, so modifiers compose without accumulating.
    pub baseline: &'a GlyphQuad,
}

/// A pluggable geometry/color transform over one character. Stateless
/// between calls: everything needed arrives through the arguments.
///
/// The capability flags are queried once when the pipeline is built, not per
/// frame; they decide which buffers get re-uploaded after a pass. A modifier
/// that declares neither flag is never worth an upload, so be honest here.
pub trait VertexModifier {
    /// Whether this modifier ever writes vertex positions.
    fn touches_geometry(&self) -> bool;

    /// Whether this modifier ever writes vertex colors.
    fn touches_vertex_color(&self) -> bool;

    fn modify_character(
        &self,
        character: &CharacterTimeline,
        ctx: TextContext<'_>,
        global_progress: f32,
        quad: &mut GlyphQuad,
    );
}

/// Ordered set of modifiers applied to every visible character each tick.
/// Registration order is application order: later modifiers see the quad as
/// mutated by earlier ones.
#[derive(Default)]
pub struct ModifierPipeline {
    modifiers: Vec<Box<dyn VertexModifier>>,
    update: BufferUpdate,
}

impl ModifierPipeline {
    pub fn new(modifiers: Vec<Box<dyn VertexModifier>>) -> Self {
        // Capability union is computed once at build time.
        let update = modifiers.iter().fold(BufferUpdate::NONE, |acc, m| {
            acc.union(BufferUpdate {
                geometry: m.touches_geometry(),
                vertex_colors: m.touches_vertex_color(),
            })
        });
        Self { modifiers, update }
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    /// The static union of all modifiers' capability flags.
    pub fn buffer_update(&self) -> BufferUpdate {
        self.update
    }

    /// Rewrites every character's live quad from the baseline snapshot and
    /// reports which buffers the host should re-upload.
    pub fn apply(
        &self,
        set: &TimelineSet,
        target: &mut dyn TextTarget,
        global_progress: f32,
    ) -> BufferUpdate {
        let text = set.cached_text();
        let character_count = set.timelines().len();

        for (timeline, baseline) in set.timelines().iter().zip(set.snapshot()) {
            let mut quad = *baseline;
            let ctx = TextContext {
                text,
                character_count,
                baseline,
            };
            for modifier in &self.modifiers {
                modifier.modify_character(timeline, ctx, global_progress, &mut quad);
            }
            target.write_quad(timeline.slot(), quad);
        }

        self.update
    }
}

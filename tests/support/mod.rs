#![allow(dead_code)]

use std::collections::HashMap;

use textjuicer::{
    BufferUpdate, CharacterSlot, CharacterTimeline, Ease, GlyphQuad, Rgba8, TextContext,
    TextTarget, Vec2, VertexModifier,
};

/// In-memory stand-in for a host text object: one 10x10 quad per character,
/// laid out left to right, whitespace invisible. Records relayouts and
/// commits so tests can observe what the core asked for.
pub struct FakeText {
    pub text: String,
    pub ready: bool,
    pub base: HashMap<u32, GlyphQuad>,
    pub quads: HashMap<u32, GlyphQuad>,
    pub relayout_count: usize,
    pub commits: Vec<BufferUpdate>,
}

impl FakeText {
    pub fn new(text: &str) -> Self {
        let mut fake = Self {
            text: text.to_string(),
            ready: true,
            base: HashMap::new(),
            quads: HashMap::new(),
            relayout_count: 0,
            commits: Vec::new(),
        };
        fake.layout();
        fake
    }

    pub fn unready(text: &str) -> Self {
        let mut fake = Self::new(text);
        fake.ready = false;
        fake
    }

    fn layout(&mut self) {
        self.base.clear();
        for (i, _) in self.text.chars().enumerate() {
            let x = i as f32 * 10.0;
            let quad = GlyphQuad::new(
                [
                    Vec2::new(x, 0.0),
                    Vec2::new(x, 10.0),
                    Vec2::new(x + 10.0, 10.0),
                    Vec2::new(x + 10.0, 0.0),
                ],
                [Rgba8::WHITE; 4],
            );
            self.base.insert(i as u32 * 4, quad);
        }
        self.quads = self.base.clone();
    }

    /// Live quad for the character at `raw_index` in the string.
    pub fn quad_for_char(&self, raw_index: usize) -> GlyphQuad {
        self.quads[&(raw_index as u32 * 4)]
    }

    pub fn base_for_char(&self, raw_index: usize) -> GlyphQuad {
        self.base[&(raw_index as u32 * 4)]
    }
}

impl TextTarget for FakeText {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn raw_text(&self) -> &str {
        &self.text
    }

    fn character_slots(&self) -> Vec<CharacterSlot> {
        self.text
            .chars()
            .enumerate()
            .map(|(i, c)| CharacterSlot {
                material_index: 0,
                vertex_index: i as u32 * 4,
                visible: !c.is_whitespace(),
            })
            .collect()
    }

    fn force_relayout(&mut self) {
        self.relayout_count += 1;
        self.layout();
    }

    fn base_quad(&self, slot: CharacterSlot) -> GlyphQuad {
        self.base[&slot.vertex_index]
    }

    fn write_quad(&mut self, slot: CharacterSlot, quad: GlyphQuad) {
        self.quads.insert(slot.vertex_index, quad);
    }

    fn commit(&mut self, update: BufferUpdate) {
        self.commits.push(update);
    }

    fn set_raw_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.layout();
    }
}

/// Color-only modifier: alpha follows the character's local progress.
pub struct FadeIn;

impl VertexModifier for FadeIn {
    fn touches_geometry(&self) -> bool {
        false
    }

    fn touches_vertex_color(&self) -> bool {
        true
    }

    fn modify_character(
        &self,
        character: &CharacterTimeline,
        _ctx: TextContext<'_>,
        _global_progress: f32,
        quad: &mut GlyphQuad,
    ) {
        let p = character.progress().clamp(0.0, 1.0);
        quad.set_alpha((p * 255.0) as u8);
    }
}

/// Geometry-only modifier: characters rise into place from below.
pub struct RiseIn {
    pub distance: f32,
}

impl VertexModifier for RiseIn {
    fn touches_geometry(&self) -> bool {
        true
    }

    fn touches_vertex_color(&self) -> bool {
        false
    }

    fn modify_character(
        &self,
        character: &CharacterTimeline,
        _ctx: TextContext<'_>,
        _global_progress: f32,
        quad: &mut GlyphQuad,
    ) {
        let t = Ease::OutQuad.apply(character.progress().clamp(0.0, 1.0));
        quad.translate(Vec2::new(0.0, (1.0 - t) * self.distance));
    }
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

/// Route core tracing output through the test harness when diagnosing a
/// failure. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

use std::ops::{Add, Mul, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// One character's renderable geometry: four corner vertices plus their colors.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphQuad {
    pub positions: [Vec2; 4],
    pub colors: [Rgba8; 4],
}

impl GlyphQuad {
    pub fn new(positions: [Vec2; 4], colors: [Rgba8; 4]) -> Self {
        Self { positions, colors }
    }

    pub fn center(&self) -> Vec2 {
        let sum = self
            .positions
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + *p);
        sum * 0.25
    }

    pub fn translate(&mut self, offset: Vec2) {
        for p in &mut self.positions {
            *p = *p + offset;
        }
    }

    pub fn scale_about_center(&mut self, factor: f32) {
        let c = self.center();
        for p in &mut self.positions {
            *p = c + (*p - c) * factor;
        }
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        for c in &mut self.colors {
            c.a = alpha;
        }
    }
}

/// Locator for one character inside the host's mesh buffers, as reported by
/// the layout. `visible` is false for characters the layout produced no
/// geometry for (whitespace, control characters).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CharacterSlot {
    pub material_index: u32,
    pub vertex_index: u32,
    pub visible: bool,
}

/// Which externally owned buffers need a re-upload after a modifier pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BufferUpdate {
    pub geometry: bool,
    pub vertex_colors: bool,
}

impl BufferUpdate {
    pub const NONE: Self = Self {
        geometry: false,
        vertex_colors: false,
    };

    pub fn any(self) -> bool {
        self.geometry || self.vertex_colors
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            geometry: self.geometry || other.geometry,
            vertex_colors: self.vertex_colors || other.vertex_colors,
        }
    }
}

/// Host frame time, in both clock flavors; [`ClockMode`](crate::ClockMode)
/// selects which one drives playback.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameDelta {
    pub scaled_secs: f32,
    pub unscaled_secs: f32,
}

impl FrameDelta {
    /// Both clocks advancing at the same rate.
    pub fn uniform(secs: f32) -> Self {
        Self {
            scaled_secs: secs,
            unscaled_secs: secs,
        }
    }
}

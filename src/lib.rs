#![forbid(unsafe_code)]

pub mod completion;
pub mod config;
pub mod core;
pub mod ease;
pub mod error;
pub mod juicer;
pub mod modifier;
pub mod playback;
pub mod target;
pub mod timeline;
pub mod timeline_set;

pub use crate::core::{BufferUpdate, CharacterSlot, FrameDelta, GlyphQuad, Rgba8, Vec2};
pub use completion::WaitForCompletion;
pub use config::{ClockMode, JuicerConfig};
pub use ease::Ease;
pub use error::{JuicerError, JuicerResult};
pub use juicer::TextJuicer;
pub use modifier::{ModifierPipeline, TextContext, VertexModifier};
pub use playback::{PlayState, PlaybackController};
pub use target::TextTarget;
pub use timeline::CharacterTimeline;
pub use timeline_set::TimelineSet;

use std::sync::{Arc, Mutex};

use crate::{
    completion::{WaitForCompletion, WaitState},
    config::JuicerConfig,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Stopped,
    Playing,
}

/// Global playback state: elapsed time, overall progress and the
/// Playing/Stopped transitions. Exactly one of the two fields is
/// authoritative on any tick: the clock drives progress while playing, and
/// progress drives elapsed time when stopped or externally controlled.
#[derive(Debug)]
pub struct PlaybackController {
    state: PlayState,
    elapsed: f32,
    progress: f32,
    completion_event: bool,
    waiters: Vec<Arc<Mutex<WaitState>>>,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self {
            state: PlayState::Stopped,
            elapsed: 0.0,
            progress: 0.0,
            completion_event: false,
            waiters: Vec::new(),
        }
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn play(&mut self, from_beginning: bool) {
        if from_beginning {
            self.elapsed = 0.0;
        }
        self.state = PlayState::Playing;
    }

    /// Stops playback; elapsed time is retained.
    pub fn stop(&mut self) {
        let was_playing = self.is_playing();
        self.state = PlayState::Stopped;
        if was_playing {
            self.resolve_waiters();
        }
    }

    /// Rewinds without changing the play/stop state.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    /// Only effective while playing.
    pub fn complete(&mut self) {
        if self.is_playing() {
            self.progress = 1.0;
        }
    }

    /// External progress takes over for this call: `elapsed` is derived from
    /// it rather than the other way around.
    pub fn set_progress(&mut self, progress: f32, total_span: f32) {
        self.progress = progress.clamp(0.0, 1.0);
        self.elapsed = self.progress * total_span;
    }

    /// Clock advance for one tick. Skipped entirely while stopped or when an
    /// external driver owns progress. Handles the end of the window:
    /// play-forever keeps growing, loop wraps without completing, otherwise
    /// the controller clamps, stops and fires the completion event.
    pub fn advance(&mut self, delta_secs: f32, total_span: f32, config: &JuicerConfig) {
        if !self.is_playing() || config.animation_controlled {
            return;
        }

        self.elapsed += delta_secs;
        if self.elapsed < total_span {
            return;
        }
        if config.play_forever {
            return;
        }

        if config.looped {
            self.elapsed = 0.0;
        } else {
            self.elapsed = total_span;
            self.progress = 1.0;
            self.stop();
            self.completion_event = true;
            tracing::debug!(total_span, "playback completed");
        }
    }

    /// Keeps elapsed and progress consistent after `advance`. A collapsed
    /// window (no characters, zero span) means "no animation": progress is
    /// 1 and no division happens.
    pub fn sync(&mut self, total_span: f32, animation_controlled: bool) {
        if !self.is_playing() || animation_controlled {
            self.elapsed = self.progress * total_span.max(0.0);
        } else if total_span > 0.0 {
            self.progress = self.elapsed / total_span;
        } else {
            self.progress = 1.0;
        }
    }

    /// True once per completed (non-loop, non-forever) playback.
    pub fn take_completion_event(&mut self) -> bool {
        std::mem::take(&mut self.completion_event)
    }

    /// A handle resolved on the next Playing -> Stopped transition; already
    /// resolved if playback is not running.
    pub fn wait_for_completion(&mut self) -> WaitForCompletion {
        let resolved = !self.is_playing();
        let handle = WaitForCompletion::new(resolved);
        if !resolved {
            self.waiters.push(handle.shared());
        }
        handle
    }

    fn resolve_waiters(&mut self) {
        for waiter in self.waiters.drain(..) {
            WaitState::resolve(&waiter);
        }
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}

use crate::{
    completion::WaitForCompletion,
    config::JuicerConfig,
    core::FrameDelta,
    error::{JuicerError, JuicerResult},
    modifier::ModifierPipeline,
    playback::PlaybackController,
    target::TextTarget,
    timeline::CharacterTimeline,
    timeline_set::TimelineSet,
};

/// The orchestrator: owns configuration, the timeline cache, playback state
/// and the modifier pipeline, and drives one cooperative update per host
/// frame through [`tick`](Self::tick).
///
/// All failure during ticking is deferral, never an error: an unready target
/// skips the tick and everything retries once readiness is observed.
pub struct TextJuicer {
    config: JuicerConfig,
    cache: TimelineSet,
    playback: PlaybackController,
    pipeline: ModifierPipeline,
    active: bool,
    ready_seen: bool,
    dispatched_after_ready: bool,
    force_update: bool,
}

impl TextJuicer {
    pub fn new(config: JuicerConfig, pipeline: ModifierPipeline) -> JuicerResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cache: TimelineSet::new(),
            playback: PlaybackController::new(),
            pipeline,
            active: true,
            ready_seen: false,
            dispatched_after_ready: false,
            force_update: false,
        })
    }

    pub fn config(&self) -> &JuicerConfig {
        &self.config
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// Overall animation progress. May exceed 1 in play-forever mode.
    pub fn progress(&self) -> f32 {
        self.playback.progress()
    }

    pub fn elapsed(&self) -> f32 {
        self.playback.elapsed()
    }

    pub fn total_span(&self) -> f32 {
        self.cache.total_span()
    }

    pub fn timelines(&self) -> &[CharacterTimeline] {
        self.cache.timelines()
    }

    /// Replaces the configuration after validating it, and invalidates the
    /// timeline cache so stagger offsets are recomputed.
    pub fn set_config(&mut self, config: JuicerConfig) -> JuicerResult<()> {
        config.validate()?;
        self.config = config;
        self.on_config_changed();
        Ok(())
    }

    /// Takes effect for the global clock immediately; per-character clamping
    /// picks the flag up at the next rebuild.
    pub fn set_play_forever(&mut self, play_forever: bool) {
        self.config.play_forever = play_forever;
    }

    pub fn mark_dirty(&mut self) {
        self.cache.mark_dirty();
    }

    /// Starts playback from the beginning. If the target has not been seen
    /// ready yet, the request is recorded and playback starts automatically
    /// on the first ready tick.
    pub fn play(&mut self) {
        self.play_from(true);
    }

    pub fn play_from(&mut self, from_beginning: bool) {
        if !self.ready_seen {
            self.config.play_when_ready = true;
            return;
        }
        self.playback.play(from_beginning);
    }

    pub fn stop(&mut self) {
        self.playback.stop();
    }

    pub fn restart(&mut self) {
        self.playback.restart();
    }

    pub fn complete(&mut self) {
        self.playback.complete();
    }

    /// Drives progress externally and re-applies the modifier pipeline
    /// synchronously; the effect is visible before the next tick.
    pub fn set_progress(&mut self, target: &mut dyn TextTarget, progress: f32) -> JuicerResult<()> {
        if !progress.is_finite() {
            return Err(JuicerError::animation("progress must be finite"));
        }
        self.playback.set_progress(progress, self.cache.total_span());
        self.refresh(target);
        Ok(())
    }

    /// Writes new text through the target and rebuilds the timeline cache
    /// immediately (deferred if the target is not ready yet).
    pub fn set_text(&mut self, target: &mut dyn TextTarget, text: &str) {
        target.set_raw_text(text);
        self.cache.mark_dirty();
        self.cache.rebuild_if_dirty(target, &self.config);
    }

    pub fn wait_for_completion(&mut self) -> WaitForCompletion {
        self.playback.wait_for_completion()
    }

    /// True once per completed (non-loop, non-forever) playback.
    pub fn take_completion_event(&mut self) -> bool {
        self.playback.take_completion_event()
    }

    pub fn on_activate(&mut self) {
        self.active = true;
        // The became-ready hook fires once per enable cycle.
        self.dispatched_after_ready = false;
    }

    pub fn on_deactivate(&mut self) {
        self.active = false;
        self.force_update = true;
    }

    pub fn on_config_changed(&mut self) {
        self.cache.invalidate();
    }

    /// One cooperative update. Order matters and mirrors the reference:
    /// readiness gate, cache rebuild, one-shot after-ready dispatch, clock
    /// advance, elapsed/progress sync, modifier application.
    pub fn tick(&mut self, target: &mut dyn TextTarget, delta: FrameDelta) {
        if !self.active {
            return;
        }
        if !target.is_ready() {
            self.ready_seen = false;
            return;
        }
        self.ready_seen = true;

        self.cache.rebuild_if_dirty(target, &self.config);

        if !self.dispatched_after_ready {
            self.dispatched_after_ready = true;
            self.after_ready(target);
        }

        self.playback.advance(
            self.config.delta_secs(delta),
            self.cache.total_span(),
            &self.config,
        );
        self.playback
            .sync(self.cache.total_span(), self.config.animation_controlled);
        self.cache.advance_all(self.playback.elapsed());

        if self.playback.is_playing() || self.config.animation_controlled || self.force_update {
            self.force_update = false;
            self.apply_modifiers(target);
        }
    }

    fn after_ready(&mut self, target: &mut dyn TextTarget) {
        if self.config.play_when_ready {
            self.playback.play(true);
        } else {
            let progress = self.playback.progress();
            self.playback.set_progress(progress, self.cache.total_span());
            self.refresh(target);
        }
    }

    /// Progress-driven recompute plus a synchronous modifier pass.
    fn refresh(&mut self, target: &mut dyn TextTarget) {
        self.playback.sync(self.cache.total_span(), true);
        self.cache.advance_all(self.playback.elapsed());
        self.apply_modifiers(target);
    }

    fn apply_modifiers(&mut self, target: &mut dyn TextTarget) {
        let update = self
            .pipeline
            .apply(&self.cache, target, self.playback.progress());
        if update.any() {
            target.commit(update);
        }
    }
}

use crate::{
    core::FrameDelta,
    error::{JuicerError, JuicerResult},
};

/// Which host clock advances playback. `Scaled` follows the host's time
/// scale (pauses, slow motion); `Unscaled` ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ClockMode {
    Scaled,
    Unscaled,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JuicerConfig {
    /// Local animation span of each character, seconds.
    pub duration: f32,
    /// Stagger between consecutive visible characters, seconds.
    pub delay: f32,
    /// Start playback automatically once the target becomes ready.
    pub play_when_ready: bool,
    /// Wrap elapsed time back to zero instead of completing.
    pub looped: bool,
    /// Let elapsed time (and character progress) grow without bound.
    pub play_forever: bool,
    /// An external driver owns progress; the internal clock is skipped.
    pub animation_controlled: bool,
    pub clock: ClockMode,
}

impl Default for JuicerConfig {
    fn default() -> Self {
        Self {
            duration: 0.1,
            delay: 0.05,
            play_when_ready: true,
            looped: false,
            play_forever: false,
            animation_controlled: false,
            clock: ClockMode::Scaled,
        }
    }
}

impl JuicerConfig {
    pub fn validate(&self) -> JuicerResult<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(JuicerError::config("duration must be finite and > 0"));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(JuicerError::config("delay must be finite and >= 0"));
        }
        Ok(())
    }

    pub(crate) fn delta_secs(&self, delta: FrameDelta) -> f32 {
        match self.clock {
            ClockMode::Scaled => delta.scaled_secs,
            ClockMode::Unscaled => delta.unscaled_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(JuicerConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_duration() {
        let mut cfg = JuicerConfig::default();
        cfg.duration = 0.0;
        assert!(cfg.validate().is_err());
        cfg.duration = f32::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_delay() {
        let mut cfg = JuicerConfig::default();
        cfg.delay = -0.01;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn json_roundtrip() {
        let cfg = JuicerConfig {
            duration: 0.4,
            delay: 0.02,
            looped: true,
            clock: ClockMode::Unscaled,
            ..JuicerConfig::default()
        };
        let s = serde_json::to_string(&cfg).unwrap();
        let de: JuicerConfig = serde_json::from_str(&s).unwrap();
        assert_eq!(de, cfg);
    }

    #[test]
    fn clock_mode_selects_delta() {
        let delta = FrameDelta {
            scaled_secs: 0.5,
            unscaled_secs: 1.0,
        };
        let mut cfg = JuicerConfig::default();
        assert_eq!(cfg.delta_secs(delta), 0.5);
        cfg.clock = ClockMode::Unscaled;
        assert_eq!(cfg.delta_secs(delta), 1.0);
    }
}

//! Typewriter and reading-speed text transitions.
//!
//! Every operation here is a pure constructor: it validates its arguments,
//! computes masks and durations and returns a `Step`. Nothing touches a
//! signal until a `Runner` executes the step.

use log::trace;

use crate::config::Config;
use crate::error::{check_duration, check_rate, Result};
use crate::ids::SignalId;
use crate::interp::{Interpolation, Timing};
use crate::mask::{grapheme_count, to_underscores, Placeholder, NO_BREAK_SPACE};
use crate::step::{all, chain, Step, Tween, TweenTarget};

/// One requested transition: where the text should end up and how to get there.
#[derive(Clone, Debug, Default)]
pub struct TransitionSpec {
    pub target: String,
    pub timing: Option<Timing>,
    pub interpolation: Option<Interpolation>,
}

impl TransitionSpec {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn timing(mut self, timing: Timing) -> Self {
        self.timing = Some(timing);
        self
    }

    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = Some(interpolation);
        self
    }
}

impl From<&str> for TransitionSpec {
    fn from(target: &str) -> Self {
        Self::new(target)
    }
}

impl From<String> for TransitionSpec {
    fn from(target: String) -> Self {
        Self::new(target)
    }
}

/// Builds text transition steps using an explicit `Config`.
#[derive(Clone, Debug)]
pub struct TextTransitions {
    config: Config,
}

impl Default for TextTransitions {
    fn default() -> Self {
        Self {
            config: Config::default(),
        }
    }
}

impl TextTransitions {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn tween(
        &self,
        signal: SignalId,
        target: TweenTarget,
        duration: f64,
        timing: Option<Timing>,
        interpolation: Option<Interpolation>,
    ) -> Result<Step> {
        let tween = Tween::with_target(signal, target, duration)?
            .timing(timing.unwrap_or(self.config.timing))
            .interpolation(interpolation.unwrap_or(self.config.interpolation));
        Ok(Step::Tween(tween))
    }

    /// Seconds needed to type `text` at `words_per_minute` (config default when `None`).
    pub fn rate_duration(&self, text: &str, words_per_minute: Option<f64>) -> Result<f64> {
        let wpm = check_rate(words_per_minute.unwrap_or(self.config.words_per_minute))?;
        let cps = self.config.characters_per_second(wpm);
        Ok(grapheme_count(text) as f64 / cps)
    }

    /// Mask phase then resolve phase, splitting `total_duration` by the configured ratio.
    pub fn typewriter(
        &self,
        signal: SignalId,
        spec: impl Into<TransitionSpec>,
        total_duration: f64,
    ) -> Result<Step> {
        let spec = spec.into();
        let total = check_duration(total_duration)?;
        let mask_time = total * self.config.typewriter_split;
        let text_time = total - mask_time;
        trace!(
            "typewriter {signal:?} -> {:?}: {mask_time:.3}s + {text_time:.3}s",
            spec.target
        );

        let masked = to_underscores(&spec.target);
        Ok(chain([
            self.tween(
                signal,
                TweenTarget::Text(masked),
                mask_time,
                spec.timing,
                spec.interpolation,
            )?,
            self.tween(
                signal,
                TweenTarget::Text(spec.target),
                text_time,
                spec.timing,
                spec.interpolation,
            )?,
        ]))
    }

    /// Single tween to the target, timed at reading speed.
    pub fn relative_text(
        &self,
        signal: SignalId,
        spec: impl Into<TransitionSpec>,
        words_per_minute: Option<f64>,
    ) -> Result<Step> {
        let spec = spec.into();
        let duration = self.rate_duration(&spec.target, words_per_minute)?;
        trace!("relative text {signal:?} -> {:?}: {duration:.3}s", spec.target);
        self.tween(
            signal,
            TweenTarget::Text(spec.target),
            duration,
            spec.timing,
            spec.interpolation,
        )
    }

    /// Rate-derived typewriter: relative tween to the mask, then to the text.
    pub fn relative_typewriter(
        &self,
        signal: SignalId,
        spec: impl Into<TransitionSpec>,
        words_per_minute: Option<f64>,
    ) -> Result<Step> {
        let spec = spec.into();
        let masked = TransitionSpec {
            target: to_underscores(&spec.target),
            timing: spec.timing,
            interpolation: spec.interpolation,
        };
        Ok(chain([
            self.relative_text(signal, masked, words_per_minute)?,
            self.relative_text(signal, spec, words_per_minute)?,
        ]))
    }

    /// Dissolve whatever the signal shows into underscores, then into a single
    /// no-break space. Each phase takes `phase_duration`.
    pub fn erase(
        &self,
        signal: SignalId,
        phase_duration: f64,
        timing: Option<Timing>,
    ) -> Result<Step> {
        Ok(chain([
            self.tween(
                signal,
                TweenTarget::MaskOfCurrent(Placeholder::Underscore),
                phase_duration,
                timing,
                None,
            )?,
            self.tween(
                signal,
                TweenTarget::Text(NO_BREAK_SPACE.to_string()),
                phase_duration,
                timing,
                None,
            )?,
        ]))
    }

    /// Typewriter towards the invisible mask of the current value, keeping its layout.
    ///
    /// The no-break space counts as whitespace, so the underscore scaffold of the
    /// invisible mask is the invisible mask itself: both phases target it.
    /// Defaults to ease-in-out quad timing.
    pub fn typewriter_erase(
        &self,
        signal: SignalId,
        total_duration: f64,
        timing: Option<Timing>,
    ) -> Result<Step> {
        let total = check_duration(total_duration)?;
        let mask_time = total * self.config.typewriter_split;
        let timing = Some(timing.unwrap_or(Timing::EaseInOutQuad));
        Ok(chain([
            self.tween(
                signal,
                TweenTarget::MaskOfCurrent(Placeholder::Invisible),
                mask_time,
                timing,
                None,
            )?,
            self.tween(
                signal,
                TweenTarget::MaskOfCurrent(Placeholder::Invisible),
                total - mask_time,
                timing,
                None,
            )?,
        ]))
    }

    /// Erase several signals at once; the i-th uses `base + i * increment` per phase.
    pub fn staggered_erase(
        &self,
        signals: &[SignalId],
        base: f64,
        increment: f64,
        timing: Option<Timing>,
    ) -> Result<Step> {
        let steps = signals
            .iter()
            .enumerate()
            .map(|(i, &signal)| self.erase(signal, base + i as f64 * increment, timing))
            .collect::<Result<Vec<_>>>()?;
        Ok(all(steps))
    }
}

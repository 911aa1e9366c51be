//! Composable animation steps.
//!
//! A `Step` is a description; `runtime::Runner` executes it. Durations are in
//! seconds of logical time.

use crate::error::{check_duration, Result};
use crate::ids::SignalId;
use crate::interp::{Interpolation, Timing};
use crate::mask::{mask_to_placeholder, Placeholder};

/// Value a tween moves its signal towards.
#[derive(Clone, Debug, PartialEq)]
pub enum TweenTarget {
    Text(String),
    /// Mask of whatever the signal holds when the tween starts.
    MaskOfCurrent(Placeholder),
}

impl TweenTarget {
    pub fn resolve(&self, current: &str) -> String {
        match self {
            TweenTarget::Text(text) => text.clone(),
            TweenTarget::MaskOfCurrent(placeholder) => mask_to_placeholder(current, *placeholder),
        }
    }
}

/// Interpolate one signal to a target over a duration.
#[derive(Clone, Debug)]
pub struct Tween {
    pub signal: SignalId,
    pub target: TweenTarget,
    pub duration: f64,
    pub timing: Timing,
    pub interpolation: Interpolation,
}

impl Tween {
    pub fn new(signal: SignalId, target: impl Into<String>, duration: f64) -> Result<Self> {
        Self::with_target(signal, TweenTarget::Text(target.into()), duration)
    }

    pub fn with_target(signal: SignalId, target: TweenTarget, duration: f64) -> Result<Self> {
        Ok(Self {
            signal,
            target,
            duration: check_duration(duration)?,
            timing: Timing::default(),
            interpolation: Interpolation::default(),
        })
    }

    pub fn timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Literal target, if it does not depend on the signal's value at start.
    pub fn literal_target(&self) -> Option<&str> {
        match &self.target {
            TweenTarget::Text(text) => Some(text),
            TweenTarget::MaskOfCurrent(_) => None,
        }
    }
}

impl From<Tween> for Step {
    fn from(tween: Tween) -> Self {
        Step::Tween(tween)
    }
}

#[derive(Clone, Debug)]
pub enum Step {
    Tween(Tween),
    /// Instantaneous assignment.
    Set { signal: SignalId, value: String },
    Wait(f64),
    /// Children run strictly in order.
    Chain(Vec<Step>),
    /// Children run concurrently; done when all are done.
    All(Vec<Step>),
}

/// Sequential composition.
pub fn chain(steps: impl IntoIterator<Item = Step>) -> Step {
    Step::Chain(steps.into_iter().collect())
}

/// Parallel composition.
pub fn all(steps: impl IntoIterator<Item = Step>) -> Step {
    Step::All(steps.into_iter().collect())
}

pub fn wait(seconds: f64) -> Result<Step> {
    Ok(Step::Wait(check_duration(seconds)?))
}

pub fn set(signal: SignalId, value: impl Into<String>) -> Step {
    Step::Set {
        signal,
        value: value.into(),
    }
}

impl Step {
    /// Static length in seconds: chains sum, `All` takes the longest child.
    pub fn duration(&self) -> f64 {
        match self {
            Step::Tween(tween) => tween.duration,
            Step::Set { .. } => 0.0,
            Step::Wait(seconds) => *seconds,
            Step::Chain(steps) => steps.iter().map(Step::duration).sum(),
            Step::All(steps) => steps.iter().map(Step::duration).fold(0.0, f64::max),
        }
    }

    /// Tweens in depth-first order.
    pub fn tweens(&self) -> Vec<&Tween> {
        let mut out = Vec::new();
        self.collect_tweens(&mut out);
        out
    }

    fn collect_tweens<'a>(&'a self, out: &mut Vec<&'a Tween>) {
        match self {
            Step::Tween(tween) => out.push(tween),
            Step::Set { .. } | Step::Wait(_) => {}
            Step::Chain(steps) | Step::All(steps) => {
                for step in steps {
                    step.collect_tweens(out);
                }
            }
        }
    }
}

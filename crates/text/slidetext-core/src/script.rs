//! JSON slide scripts.
//!
//! A script declares its text signals and, per slide, the steps to play when
//! that slide is reached. Steps name signals by string; `instantiate`
//! registers the signals and builds `Step` trees through `TextTransitions`.
//!
//! ```json
//! {
//!   "signals": [{ "name": "title", "text": "" }],
//!   "slides": [
//!     { "name": "intro", "steps": [
//!       { "kind": "relative_typewriter", "signal": "title", "text": "Who cares?" }
//!     ]}
//!   ]
//! }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ids::SignalId;
use crate::interp::Timing;
use crate::signal::SignalStore;
use crate::step::{self, chain, Step, Tween};
use crate::transition::{TextTransitions, TransitionSpec};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignalDecl {
    pub name: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SlideScript {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptStep {
    Typewriter {
        signal: String,
        text: String,
        duration: f64,
        timing: Option<Timing>,
    },
    RelativeText {
        signal: String,
        text: String,
        wpm: Option<f64>,
        timing: Option<Timing>,
    },
    RelativeTypewriter {
        signal: String,
        text: String,
        wpm: Option<f64>,
        timing: Option<Timing>,
    },
    Erase {
        signal: String,
        duration: f64,
        timing: Option<Timing>,
    },
    TypewriterErase {
        signal: String,
        duration: f64,
        timing: Option<Timing>,
    },
    StaggeredErase {
        signals: Vec<String>,
        base: f64,
        increment: f64,
        timing: Option<Timing>,
    },
    Set {
        signal: String,
        text: String,
    },
    Tween {
        signal: String,
        text: String,
        duration: f64,
        timing: Option<Timing>,
    },
    Wait {
        seconds: f64,
    },
    Chain {
        steps: Vec<ScriptStep>,
    },
    All {
        steps: Vec<ScriptStep>,
    },
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub signals: Vec<SignalDecl>,
    #[serde(default)]
    pub slides: Vec<SlideScript>,
}

/// A built slide, ready for a `Runner`.
#[derive(Clone, Debug)]
pub struct Slide {
    pub name: String,
    pub step: Step,
}

fn spec(text: &str, timing: Option<Timing>) -> TransitionSpec {
    TransitionSpec {
        target: text.to_string(),
        timing,
        interpolation: None,
    }
}

impl ScriptStep {
    pub fn build(&self, store: &SignalStore, tt: &TextTransitions) -> Result<Step> {
        match self {
            ScriptStep::Typewriter {
                signal,
                text,
                duration,
                timing,
            } => tt.typewriter(store.lookup(signal)?, spec(text, *timing), *duration),
            ScriptStep::RelativeText {
                signal,
                text,
                wpm,
                timing,
            } => tt.relative_text(store.lookup(signal)?, spec(text, *timing), *wpm),
            ScriptStep::RelativeTypewriter {
                signal,
                text,
                wpm,
                timing,
            } => tt.relative_typewriter(store.lookup(signal)?, spec(text, *timing), *wpm),
            ScriptStep::Erase {
                signal,
                duration,
                timing,
            } => tt.erase(store.lookup(signal)?, *duration, *timing),
            ScriptStep::TypewriterErase {
                signal,
                duration,
                timing,
            } => tt.typewriter_erase(store.lookup(signal)?, *duration, *timing),
            ScriptStep::StaggeredErase {
                signals,
                base,
                increment,
                timing,
            } => {
                let ids = signals
                    .iter()
                    .map(|name| store.lookup(name))
                    .collect::<Result<Vec<SignalId>>>()?;
                tt.staggered_erase(&ids, *base, *increment, *timing)
            }
            ScriptStep::Set { signal, text } => Ok(step::set(store.lookup(signal)?, text.as_str())),
            ScriptStep::Tween {
                signal,
                text,
                duration,
                timing,
            } => {
                let tween = Tween::new(store.lookup(signal)?, text.as_str(), *duration)?
                    .timing(timing.unwrap_or(tt.config().timing))
                    .interpolation(tt.config().interpolation);
                Ok(tween.into())
            }
            ScriptStep::Wait { seconds } => step::wait(*seconds),
            ScriptStep::Chain { steps } => Ok(chain(build_all(steps, store, tt)?)),
            ScriptStep::All { steps } => Ok(step::all(build_all(steps, store, tt)?)),
        }
    }
}

fn build_all(steps: &[ScriptStep], store: &SignalStore, tt: &TextTransitions) -> Result<Vec<Step>> {
    steps.iter().map(|s| s.build(store, tt)).collect()
}

impl Script {
    /// Register the declared signals in `store` and build every slide.
    ///
    /// On error the signals registered by this call are removed again, so the
    /// store is left as it was found.
    pub fn instantiate(&self, store: &mut SignalStore, tt: &TextTransitions) -> Result<Vec<Slide>> {
        let mut created = Vec::with_capacity(self.signals.len());
        let built = self.instantiate_into(store, tt, &mut created);
        if built.is_err() {
            debug!("rolling back {} signal(s)", created.len());
            for id in created {
                store.remove(id).ok();
            }
        }
        built
    }

    fn instantiate_into(
        &self,
        store: &mut SignalStore,
        tt: &TextTransitions,
        created: &mut Vec<SignalId>,
    ) -> Result<Vec<Slide>> {
        for decl in &self.signals {
            created.push(store.create(&decl.name, &decl.text)?);
        }
        self.slides
            .iter()
            .map(|slide| {
                let step = chain(build_all(&slide.steps, store, tt)?);
                debug!("slide {:?}: {:.3}s", slide.name, step.duration());
                Ok(Slide {
                    name: slide.name.clone(),
                    step,
                })
            })
            .collect()
    }
}

/// Parse a slide script from JSON.
pub fn parse_script_json(json: &str) -> Result<Script> {
    Ok(serde_json::from_str(json)?)
}

//! Forward-only step driver.
//!
//! The caller owns the clock: each `advance(store, dt)` runs the step for `dt`
//! seconds and writes interpolated values into the `SignalStore`. Chains pass
//! unused time on to their next child within the same call, so zero-length
//! steps resolve immediately.

use log::{debug, trace};

use crate::error::{check_duration, Result};
use crate::ids::SignalId;
use crate::outputs::{Outputs, StepEvent};
use crate::signal::SignalStore;
use crate::step::{Step, Tween};

struct Frame<'a> {
    store: &'a mut SignalStore,
    outputs: &'a mut Outputs,
}

impl Frame<'_> {
    fn write(&mut self, signal: SignalId, value: &str) -> Result<()> {
        self.store.set(signal, value)?;
        let name = &self.store.signal(signal)?.name;
        self.outputs.record(signal, name, value);
        Ok(())
    }
}

#[derive(Debug)]
struct ActiveTween {
    from: String,
    to: String,
}

#[derive(Debug)]
enum Task {
    Tween {
        tween: Tween,
        active: Option<ActiveTween>,
        elapsed: f64,
        done: bool,
    },
    Set {
        signal: SignalId,
        value: String,
        done: bool,
    },
    Wait {
        seconds: f64,
        elapsed: f64,
    },
    Chain {
        tasks: Vec<Task>,
        index: usize,
    },
    All {
        tasks: Vec<Task>,
    },
}

impl Task {
    fn build(step: Step) -> Self {
        match step {
            Step::Tween(tween) => Task::Tween {
                tween,
                active: None,
                elapsed: 0.0,
                done: false,
            },
            Step::Set { signal, value } => Task::Set {
                signal,
                value,
                done: false,
            },
            Step::Wait(seconds) => Task::Wait {
                seconds,
                elapsed: 0.0,
            },
            Step::Chain(steps) => Task::Chain {
                tasks: steps.into_iter().map(Task::build).collect(),
                index: 0,
            },
            Step::All(steps) => Task::All {
                tasks: steps.into_iter().map(Task::build).collect(),
            },
        }
    }

    fn is_done(&self) -> bool {
        match self {
            Task::Tween { done, .. } | Task::Set { done, .. } => *done,
            Task::Wait { seconds, elapsed } => elapsed >= seconds,
            Task::Chain { tasks, index } => tasks[*index..].iter().all(Task::is_done),
            Task::All { tasks } => tasks.iter().all(Task::is_done),
        }
    }

    /// Run for `dt` seconds; returns the time left over once the task is done
    /// (0 while it is still running).
    fn advance(&mut self, frame: &mut Frame<'_>, dt: f64) -> Result<f64> {
        match self {
            Task::Tween {
                tween,
                active,
                elapsed,
                done,
            } => {
                if *done {
                    return Ok(dt);
                }
                if active.is_none() {
                    let from = frame.store.get(tween.signal)?.to_string();
                    let to = tween.target.resolve(&from);
                    debug!(
                        "tween {:?} start {from:?} -> {to:?} over {:.3}s",
                        tween.signal, tween.duration
                    );
                    frame.outputs.push_event(StepEvent::TweenStarted {
                        signal: tween.signal,
                        from: from.clone(),
                        to: to.clone(),
                        duration: tween.duration,
                    });
                    *active = Some(ActiveTween { from, to });
                }
                let Some(state) = active.as_ref() else {
                    return Ok(dt);
                };

                *elapsed += dt;
                if *elapsed >= tween.duration {
                    frame.write(tween.signal, &state.to)?;
                    frame.outputs.push_event(StepEvent::TweenFinished {
                        signal: tween.signal,
                        value: state.to.clone(),
                    });
                    debug!("tween {:?} done at {:?}", tween.signal, state.to);
                    *done = true;
                    return Ok(*elapsed - tween.duration);
                }

                let progress = *elapsed / tween.duration;
                let eased = tween.timing.apply(progress);
                let value = tween.interpolation.apply(&state.from, &state.to, eased);
                frame.write(tween.signal, &value)?;
                Ok(0.0)
            }
            Task::Set {
                signal,
                value,
                done,
            } => {
                if !*done {
                    frame.write(*signal, value)?;
                    *done = true;
                }
                Ok(dt)
            }
            Task::Wait { seconds, elapsed } => {
                if *elapsed >= *seconds {
                    return Ok(dt);
                }
                *elapsed += dt;
                if *elapsed >= *seconds {
                    frame.outputs.push_event(StepEvent::WaitFinished { seconds: *seconds });
                    Ok(*elapsed - *seconds)
                } else {
                    Ok(0.0)
                }
            }
            Task::Chain { tasks, index } => {
                let mut remaining = dt;
                while let Some(task) = tasks.get_mut(*index) {
                    remaining = task.advance(frame, remaining)?;
                    if !task.is_done() {
                        return Ok(0.0);
                    }
                    *index += 1;
                }
                Ok(remaining)
            }
            Task::All { tasks } => {
                let mut leftover = dt;
                for task in tasks.iter_mut().filter(|t| !t.is_done()) {
                    leftover = leftover.min(task.advance(frame, dt)?);
                }
                if tasks.iter().all(Task::is_done) {
                    Ok(leftover)
                } else {
                    Ok(0.0)
                }
            }
        }
    }
}

/// Executes one `Step` against a `SignalStore`.
#[derive(Debug)]
pub struct Runner {
    root: Task,
    duration: f64,
    elapsed: f64,
    outputs: Outputs,
}

impl Runner {
    pub fn new(step: Step) -> Self {
        let duration = step.duration();
        Self {
            root: Task::build(step),
            duration,
            elapsed: 0.0,
            outputs: Outputs::default(),
        }
    }

    /// Static length of the step being run.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.root.is_done()
    }

    /// Advance by `dt` seconds and return what changed.
    ///
    /// Errors from the signal store (a signal removed mid-run) are returned as-is;
    /// writes made earlier in the same frame stay applied.
    pub fn advance(&mut self, store: &mut SignalStore, dt: f64) -> Result<&Outputs> {
        let dt = check_duration(dt)?;
        self.elapsed += dt;
        trace!("advance {dt:.4}s (t={:.4}s)", self.elapsed);
        self.run_frame(store, dt)?;
        Ok(&self.outputs)
    }

    /// Run everything that is left and return the final frame.
    pub fn finish(&mut self, store: &mut SignalStore) -> Result<&Outputs> {
        self.run_frame(store, f64::MAX)?;
        self.elapsed = self.elapsed.max(self.duration);
        Ok(&self.outputs)
    }

    fn run_frame(&mut self, store: &mut SignalStore, dt: f64) -> Result<()> {
        self.outputs.clear();
        let mut frame = Frame {
            store,
            outputs: &mut self.outputs,
        };
        self.root.advance(&mut frame, dt)?;
        Ok(())
    }
}

/// Run `step` to completion in one go.
pub fn run_to_end(step: Step, store: &mut SignalStore) -> Result<()> {
    Runner::new(step).finish(store).map(|_| ())
}

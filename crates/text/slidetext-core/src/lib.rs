//! slidetext core
//!
//! Typewriter-style text transitions for scripted slide animations. The
//! transition builders in [`transition`] turn a target string and a timing
//! budget (fixed seconds or a words-per-minute rate) into composable [`Step`]s;
//! [`Runner`] plays those steps against the text signals in a [`SignalStore`].

pub mod config;
pub mod error;
pub mod ids;
pub mod interp;
pub mod mask;
pub mod outputs;
pub mod runtime;
pub mod script;
pub mod signal;
pub mod step;
pub mod transition;

// Re-exports for consumers
pub use config::Config;
pub use error::{Result, TransitionError};
pub use ids::SignalId;
pub use interp::{Interpolation, Timing};
pub use mask::{
    grapheme_count, mask_to_placeholder, to_invisible, to_underscores, Placeholder, NO_BREAK_SPACE,
};
pub use outputs::{Change, Outputs, StepEvent};
pub use runtime::{run_to_end, Runner};
pub use script::{parse_script_json, Script, ScriptStep, Slide};
pub use signal::{SignalStore, TextSignal};
pub use step::{all, chain, Step, Tween, TweenTarget};
pub use transition::{TextTransitions, TransitionSpec};

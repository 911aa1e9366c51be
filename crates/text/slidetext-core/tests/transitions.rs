use approx::assert_abs_diff_eq;
use slidetext_core::{
    to_invisible, to_underscores, Config, Runner, SignalStore, Step, TextTransitions, Timing,
    TransitionError, TransitionSpec, NO_BREAK_SPACE,
};

fn store_with(name: &str, initial: &str) -> (SignalStore, slidetext_core::SignalId) {
    let mut store = SignalStore::new();
    let id = store.create(name, initial).unwrap();
    (store, id)
}

#[test]
fn typewriter_decomposes_into_mask_then_text() {
    let tt = TextTransitions::default();
    let (_, sig) = store_with("title", "");
    let step = tt.typewriter(sig, "Hello World", 3.0).unwrap();

    let Step::Chain(phases) = &step else {
        panic!("typewriter should be a chain, got {step:?}");
    };
    assert_eq!(phases.len(), 2);

    let tweens = step.tweens();
    assert_abs_diff_eq!(tweens[0].duration, 1.0, epsilon = 1e-12);
    assert_eq!(tweens[0].literal_target(), Some("_____ _____"));
    assert_abs_diff_eq!(tweens[1].duration, 2.0, epsilon = 1e-12);
    assert_eq!(tweens[1].literal_target(), Some("Hello World"));
    assert_abs_diff_eq!(step.duration(), 3.0, epsilon = 1e-12);
}

#[test]
fn typewriter_visits_mask_at_phase_boundary() {
    let tt = TextTransitions::default();
    let (mut store, sig) = store_with("title", "");
    let mut runner = Runner::new(tt.typewriter(sig, "Hello World", 3.0).unwrap());

    // ease-in-out cubic is exactly 0.5 half way through the first phase
    runner.advance(&mut store, 0.5).unwrap();
    assert_eq!(store.get(sig).unwrap(), "_____ ");

    runner.advance(&mut store, 0.5).unwrap();
    assert_eq!(store.get(sig).unwrap(), "_____ _____");
    assert!(!runner.is_finished());

    runner.advance(&mut store, 2.0).unwrap();
    assert_eq!(store.get(sig).unwrap(), "Hello World");
    assert!(runner.is_finished());
}

#[test]
fn relative_text_duration_follows_reading_speed() {
    let tt = TextTransitions::default();
    let (_, sig) = store_with("t", "");
    let step = tt.relative_text(sig, "Hi", Some(166.0)).unwrap();
    assert_abs_diff_eq!(step.duration(), 2.0 / (166.0 * 5.0 / 60.0), epsilon = 1e-12);
    assert_abs_diff_eq!(step.duration(), 0.1446, epsilon = 1e-4);

    // default rate is 166 wpm
    let default_rate = tt.relative_text(sig, "Hi", None).unwrap();
    assert_abs_diff_eq!(default_rate.duration(), step.duration(), epsilon = 1e-12);
}

#[test]
fn relative_text_counts_graphemes() {
    let tt = TextTransitions::default();
    let (_, sig) = store_with("t", "");
    let composed = tt.relative_text(sig, "e\u{301}", None).unwrap();
    let plain = tt.relative_text(sig, "e", None).unwrap();
    assert_abs_diff_eq!(composed.duration(), plain.duration(), epsilon = 1e-12);
}

#[test]
fn empty_relative_text_still_sets_the_signal() {
    let tt = TextTransitions::default();
    let (mut store, sig) = store_with("t", "stale");
    let step = tt.relative_text(sig, "", Some(166.0)).unwrap();
    assert_eq!(step.duration(), 0.0);

    let mut runner = Runner::new(step);
    let out = runner.advance(&mut store, 0.0).unwrap();
    assert_eq!(out.value_of("t"), Some(""));
    assert_eq!(store.get(sig).unwrap(), "");
    assert!(runner.is_finished());
}

#[test]
fn relative_typewriter_phases_have_equal_durations() {
    let tt = TextTransitions::default();
    let (_, sig) = store_with("t", "");
    let text = "several immutable references (&T)";
    let step = tt.relative_typewriter(sig, text, Some(200.0)).unwrap();

    let mask_phase = tt.rate_duration(&to_underscores(text), Some(200.0)).unwrap();
    let text_phase = tt.rate_duration(text, Some(200.0)).unwrap();
    assert_abs_diff_eq!(mask_phase, text_phase, epsilon = 1e-12);
    assert_abs_diff_eq!(step.duration(), mask_phase + text_phase, epsilon = 1e-12);

    let tweens = step.tweens();
    assert_eq!(tweens.len(), 2);
    assert_eq!(tweens[0].literal_target(), Some(to_underscores(text).as_str()));
    assert_eq!(tweens[1].literal_target(), Some(text));
}

#[test]
fn invalid_arguments_are_rejected() {
    let tt = TextTransitions::default();
    let (_, sig) = store_with("t", "");
    assert!(matches!(
        tt.typewriter(sig, "x", -1.0),
        Err(TransitionError::InvalidDuration { .. })
    ));
    assert!(matches!(
        tt.typewriter(sig, "x", f64::INFINITY),
        Err(TransitionError::InvalidDuration { .. })
    ));
    assert!(matches!(
        tt.relative_text(sig, "x", Some(-5.0)),
        Err(TransitionError::InvalidRate { .. })
    ));
    assert!(matches!(
        tt.relative_typewriter(sig, "x", Some(f64::NAN)),
        Err(TransitionError::InvalidRate { .. })
    ));
    assert!(tt.erase(sig, -0.5, None).is_err());
}

#[test]
fn custom_config_changes_rates() {
    let tt = TextTransitions::new(Config {
        words_per_minute: 60.0,
        average_word_length: 1.0,
        ..Config::default()
    })
    .unwrap();
    // one character per second
    assert_abs_diff_eq!(tt.rate_duration("abc", None).unwrap(), 3.0, epsilon = 1e-12);
}

#[test]
fn erase_masks_the_value_present_at_start() {
    let tt = TextTransitions::default();
    let (mut store, sig) = store_with("t", "Hello");
    let step = tt.erase(sig, 0.5, Some(Timing::Linear)).unwrap();

    // built before the text changes; the mask must follow the later value
    store.set(sig, "Hi you").unwrap();
    let mut runner = Runner::new(step);
    runner.advance(&mut store, 0.5).unwrap();
    assert_eq!(store.get(sig).unwrap(), "__ ___");

    runner.finish(&mut store).unwrap();
    assert_eq!(store.get(sig).unwrap(), NO_BREAK_SPACE.to_string());
}

#[test]
fn typewriter_erase_keeps_layout_invisible() {
    let tt = TextTransitions::default();
    let (mut store, sig) = store_with("t", "or ...");
    let step = tt.typewriter_erase(sig, 1.5, None).unwrap();
    assert_abs_diff_eq!(step.duration(), 1.5, epsilon = 1e-12);

    let tweens = step.tweens();
    assert!(tweens
        .iter()
        .all(|t| matches!(t.timing, Timing::EaseInOutQuad)));

    let hidden = "\u{a0}\u{a0} \u{a0}\u{a0}\u{a0}";
    let mut runner = Runner::new(step);
    runner.advance(&mut store, 0.5).unwrap();
    assert_eq!(store.get(sig).unwrap(), hidden);
    runner.finish(&mut store).unwrap();
    assert_eq!(store.get(sig).unwrap(), hidden);
}

#[test]
fn typewriter_erase_matches_typewriter_to_invisible_mask() {
    let tt = TextTransitions::default();
    let (mut erase_store, erased) = store_with("t", "or ...");
    let (mut typed_store, typed) = store_with("t", "or ...");

    let mut erase = Runner::new(tt.typewriter_erase(erased, 1.5, None).unwrap());
    let mut typewriter = Runner::new(
        tt.typewriter(
            typed,
            TransitionSpec::new(to_invisible("or ...")).timing(Timing::EaseInOutQuad),
            1.5,
        )
        .unwrap(),
    );
    for _ in 0..6 {
        erase.advance(&mut erase_store, 0.25).unwrap();
        typewriter.advance(&mut typed_store, 0.25).unwrap();
        assert_eq!(erase_store.get(erased).unwrap(), typed_store.get(typed).unwrap());
        assert!(!erase_store.get(erased).unwrap().contains('_'));
    }
}

#[test]
fn staggered_erase_spreads_durations() {
    let tt = TextTransitions::default();
    let mut store = SignalStore::new();
    let ids: Vec<_> = ["a", "b", "c"]
        .iter()
        .map(|n| store.create(n, "text").unwrap())
        .collect();
    let step = tt
        .staggered_erase(&ids, 0.25, 0.125, Some(Timing::EaseOutQuad))
        .unwrap();

    let durations: Vec<f64> = step.tweens().iter().map(|t| t.duration).collect();
    assert_eq!(durations, vec![0.25, 0.25, 0.375, 0.375, 0.5, 0.5]);
    assert_abs_diff_eq!(step.duration(), 1.0, epsilon = 1e-12);

    slidetext_core::run_to_end(step, &mut store).unwrap();
    for id in ids {
        assert_eq!(store.get(id).unwrap(), "\u{a0}");
    }
}

#[test]
fn requested_interpolation_is_used() {
    fn snap(_: &str, to: &str, _: f64) -> String {
        to.to_string()
    }
    let tt = TextTransitions::default();
    let (mut store, sig) = store_with("t", "");
    let spec = TransitionSpec::new("abcdef")
        .timing(Timing::Linear)
        .interpolation(slidetext_core::Interpolation::Custom(snap));
    let mut runner = Runner::new(tt.relative_text(sig, spec, None).unwrap());
    runner.advance(&mut store, 0.01).unwrap();
    assert_eq!(store.get(sig).unwrap(), "abcdef");
}

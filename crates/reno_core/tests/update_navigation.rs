use std::sync::Once;

use pretty_assertions::assert_eq;
use reno_core::{update, AppState, Effect, Msg, StepId};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(reno_logging::initialize_for_tests);
}

fn press_next(state: AppState) -> (AppState, Vec<Effect>) {
    update(state, Msg::NextPressed)
}

fn press_back(state: AppState) -> (AppState, Vec<Effect>) {
    update(state, Msg::BackPressed)
}

#[test]
fn initial_state_is_upload_and_idle() {
    init_logging();
    let state = AppState::new();
    let view = state.view();

    assert_eq!(view.step, StepId::Upload);
    assert_eq!(view.step_number, 1);
    assert!(!view.analyzing);
    assert!(view.files.is_empty());
    assert_eq!(view.prompt, "");
}

#[test]
fn back_on_first_step_is_clamped() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = press_back(state);
    assert_eq!(state.view().step, StepId::Upload);
    assert!(effects.is_empty());

    // Repeated retreats never leave the first step.
    let (state, _) = press_back(state);
    let (state, _) = press_back(state);
    assert_eq!(state.view().step_number, 1);
}

#[test]
fn next_on_confirm_starts_analysis_without_changing_step() {
    init_logging();
    let state = AppState::new();
    let (state, _) = press_next(state);
    assert_eq!(state.view().step, StepId::Confirm);

    let (state, effects) = press_next(state);
    let view = state.view();

    // The flag flips immediately; the step waits for the timer.
    assert!(view.analyzing);
    assert_eq!(view.step, StepId::Confirm);
    assert_eq!(effects, vec![Effect::StartAnalysis]);
}

#[test]
fn navigation_is_ignored_while_analyzing() {
    init_logging();
    let state = AppState::new();
    let (state, _) = press_next(state);
    let (mut state, _) = press_next(state);
    assert!(state.consume_dirty());

    let (state, effects) = press_next(state);
    assert!(state.view().analyzing);
    assert_eq!(state.view().step, StepId::Confirm);
    assert!(effects.is_empty());

    let (mut state, effects) = press_back(state);
    assert_eq!(state.view().step, StepId::Confirm);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn analysis_finished_lands_on_suggestions() {
    init_logging();
    let state = AppState::new();
    let (state, _) = press_next(state);
    let (state, _) = press_next(state);

    let (state, effects) = update(state, Msg::AnalysisFinished);
    let view = state.view();

    assert_eq!(view.step, StepId::Suggestions);
    assert!(!view.analyzing);
    assert!(effects.is_empty());
}

#[test]
fn analysis_finished_while_idle_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::AnalysisFinished);

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn next_on_last_step_is_clamped() {
    init_logging();
    let mut state = AppState::new();
    // Walk the whole flow: 1 -> 2 -> (analysis) -> 3 -> 4 -> 5.
    (state, _) = press_next(state);
    (state, _) = press_next(state);
    (state, _) = update(state, Msg::AnalysisFinished);
    (state, _) = press_next(state);
    (state, _) = press_next(state);
    assert_eq!(state.view().step, StepId::FinalPreview);

    // "Complete" does nothing within this scope.
    let (mut state, effects) = press_next(state);
    assert_eq!(state.view().step, StepId::FinalPreview);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn step_stays_in_bounds_under_arbitrary_navigation() {
    init_logging();
    let mut state = AppState::new();
    let presses = [true, true, false, false, false, true, false, true, true, false];
    for forward in presses {
        let (next, _) = if forward {
            press_next(state)
        } else {
            press_back(state)
        };
        state = next;
        let number = state.view().step_number;
        assert!((1..=5).contains(&number), "step {number} out of bounds");
        if state.view().analyzing {
            (state, _) = update(state, Msg::AnalysisFinished);
        }
    }
}

#[test]
fn prompt_is_replaced_verbatim() {
    init_logging();
    let state = AppState::new();
    let (mut state, effects) = update(
        state,
        Msg::PromptChanged("  turn this into a 5 minute course  ".to_string()),
    );

    assert_eq!(state.view().prompt, "  turn this into a 5 minute course  ");
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    // Re-sending the same text does not dirty the view.
    let (mut state, _) = update(
        state,
        Msg::PromptChanged("  turn this into a 5 minute course  ".to_string()),
    );
    assert!(!state.consume_dirty());
}

use crate::{AppState, Effect, Msg, StepId};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PromptChanged(text) => {
            state.set_prompt(text);
            Vec::new()
        }
        Msg::FilesAdded(handles) => {
            if handles.is_empty() {
                return (state, Vec::new());
            }
            state
                .append_files(handles)
                .into_iter()
                .map(|(file_id, path)| Effect::CreatePreview { file_id, path })
                .collect()
        }
        Msg::FileRemoved { index } => match state.remove_file(index) {
            Some(file_id) => vec![Effect::RevokePreview { file_id }],
            None => Vec::new(),
        },
        Msg::NextPressed => {
            if state.is_analyzing() {
                // The analysis overlay blocks navigation until the timer fires.
                Vec::new()
            } else if state.step() == StepId::Confirm {
                state.begin_analysis();
                vec![Effect::StartAnalysis]
            } else {
                // "Complete" on the last step is a no-op; the step is clamped.
                state.advance_step();
                Vec::new()
            }
        }
        Msg::BackPressed => {
            if !state.is_analyzing() {
                state.retreat_step();
            }
            Vec::new()
        }
        Msg::AnalysisFinished => {
            if state.is_analyzing() {
                state.finish_analysis();
            }
            Vec::new()
        }
        Msg::PreviewReady { file_id, reference } => {
            // A file removed while its preview was in flight has already been
            // revoked; the stale reference is dropped here.
            state.attach_preview(file_id, reference);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

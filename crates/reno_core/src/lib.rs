//! Reno core: pure wizard state machine and view-model helpers.
mod catalog;
mod effect;
mod msg;
mod state;
mod steps;
mod update;
mod view_model;

pub use catalog::{chapters, Chapter, FINAL_VIDEO};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, FileHandle, FileId, StepId, MAX_SELECTED_FILES};
pub use steps::{step_info, StepInfo, STEPS};
pub use update::update;
pub use view_model::{AddStats, FileRowView, WizardViewModel};

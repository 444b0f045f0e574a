use crate::StepId;

/// One row of the wizard's stage rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    pub id: StepId,
    pub title: &'static str,
    pub description: &'static str,
}

/// The five wizard stages, in presentation order.
pub const STEPS: [StepInfo; 5] = [
    StepInfo {
        id: StepId::Upload,
        title: "Upload footage",
        description: "Submit videos and a brief",
    },
    StepInfo {
        id: StepId::Confirm,
        title: "Confirm footage",
        description: "Double-check videos and text",
    },
    StepInfo {
        id: StepId::Suggestions,
        title: "Chapter suggestions",
        description: "AI segmentation plan",
    },
    StepInfo {
        id: StepId::ClipPreview,
        title: "Chapter preview",
        description: "Quick clip review",
    },
    StepInfo {
        id: StepId::FinalPreview,
        title: "Final preview",
        description: "Confirm the finished cut",
    },
];

pub fn step_info(step: StepId) -> &'static StepInfo {
    &STEPS[usize::from(step.number() - 1)]
}

#[cfg(test)]
mod tests {
    use super::{step_info, STEPS};

    #[test]
    fn table_order_matches_step_numbers() {
        for (index, info) in STEPS.iter().enumerate() {
            assert_eq!(usize::from(info.id.number()), index + 1);
            assert_eq!(step_info(info.id).title, info.title);
        }
    }
}

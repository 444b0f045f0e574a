//! Mocked chapter catalog. Pure fixture data standing in for a backend that
//! does not exist in this scope; never mutated at runtime.

/// A mocked "AI-suggested" chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chapter {
    pub id: &'static str,
    pub title: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub summary: &'static str,
    pub clip: &'static str,
}

/// Asset path of the mocked final cut shown on the last step.
pub const FINAL_VIDEO: &str = "/videos/final-demo.mp4";

const CHAPTERS: [Chapter; 4] = [
    Chapter {
        id: "c1",
        title: "Cold open: pose the question",
        start: "00:00",
        end: "01:12",
        summary: "Raise the core question up front to build motivation and set expectations.",
        clip: "/videos/sample-1.mp4",
    },
    Chapter {
        id: "c2",
        title: "Method breakdown: the three-step frame",
        start: "01:12",
        end: "03:08",
        summary: "Break the main method down and pin the key action and outcome of each step.",
        clip: "/videos/sample-2.mp4",
    },
    Chapter {
        id: "c3",
        title: "Case walkthrough: a real scenario",
        start: "03:08",
        end: "05:02",
        summary: "Reinforce the idea with a real case and show the before/after contrast.",
        clip: "/videos/sample-3.mp4",
    },
    Chapter {
        id: "c4",
        title: "Wrap-up: the next move",
        start: "05:02",
        end: "05:45",
        summary: "Recap the takeaways and point the viewer at their next action.",
        clip: "/videos/sample-4.mp4",
    },
];

/// The shared chapter fixture. The suggestion view, the clip-preview view and
/// the final summary all read this same slice.
pub fn chapters() -> &'static [Chapter] {
    &CHAPTERS
}

#[cfg(test)]
mod tests {
    use super::chapters;

    #[test]
    fn chapter_ids_are_unique_and_ordered() {
        let ids: Vec<_> = chapters().iter().map(|chapter| chapter.id).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3", "c4"]);
    }

    #[test]
    fn chapter_time_ranges_are_contiguous() {
        for pair in chapters().windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }
}

//! Presentation layer: view state plus HTML and terminal renderers.

pub mod chart;
pub mod html;
pub mod terminal;

pub use chart::{ChartKind, ChartPoint, ChartSpec};

/// Example prompts offered in the sidebar.
pub const QUICK_QUESTIONS: [&str; 4] = [
    "Show me temperature trends in the Indian Ocean",
    "What's the salinity profile at different depths?",
    "Analyze ocean currents near the Bay of Bengal",
    "Display seasonal temperature variations",
];

pub const THINKING_LABEL: &str = "FloatChat AI is thinking...";

/// The only state the presentation layer owns: the input box.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChatView {
    draft: String,
}

impl ChatView {
    pub fn with_draft(draft: impl Into<String>) -> Self {
        Self {
            draft: draft.into(),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Copies a quick question into the input without submitting it.
    pub fn pick_question(&mut self, index: usize) -> Option<&'static str> {
        let question = QUICK_QUESTIONS.get(index).copied()?;
        self.draft = question.to_string();
        Some(question)
    }

    /// Mirrors the send button: enabled for a non-blank draft while nothing is pending.
    pub fn can_send(&self, pending: bool) -> bool {
        !pending && !self.draft.trim().is_empty()
    }

    /// Hands the draft over for submission and clears the input.
    pub fn take_draft(&mut self) -> String {
        std::mem::take(&mut self.draft)
    }
}

//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackVector};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: FeedbackVector) -> String {
    feedback
        .symbols()
        .iter()
        .map(|symbol| match symbol {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Plural suffix for a count
#[must_use]
pub const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "es" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_to_emoji_mixed() {
        let feedback = FeedbackVector::parse("GY.G.").unwrap();
        assert_eq!(feedback_to_emoji(feedback), "🟩🟨⬜🟩⬜");
    }

    #[test]
    fn feedback_to_emoji_all_green() {
        assert_eq!(feedback_to_emoji(FeedbackVector::SOLVED), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn plural_suffix() {
        assert_eq!(plural(1), "");
        assert_eq!(plural(3), "es");
    }
}

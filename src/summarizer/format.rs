//! Summary rendering
//!
//! Prose joins the selected sentences with single spaces. Bulleted output
//! re-segments the assembled prose and emits one `• ` line per sentence,
//! separated by a blank line; a sentence the segmenter merges or splits on
//! the second pass is bulleted as the segmenter sees it.

use crate::nlp::segmenter::Segmenter;
use crate::types::{OutputStyle, Summary};

/// Bullet prefix for each line
pub const BULLET: &str = "• ";

/// Separator between bullet lines
const BULLET_SEPARATOR: &str = "\n\n";

/// Bullet every sentence the segmenter finds in `summary_text`
pub fn format_bulleted(segmenter: &Segmenter, summary_text: &str) -> String {
    segmenter
        .segment(summary_text)
        .iter()
        .map(|sentence| format!("{BULLET}{sentence}"))
        .collect::<Vec<_>>()
        .join(BULLET_SEPARATOR)
}

/// Renders a [`Summary`] in one [`OutputStyle`]
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    segmenter: &'a Segmenter,
    style: OutputStyle,
}

impl<'a> Formatter<'a> {
    pub fn new(segmenter: &'a Segmenter, style: OutputStyle) -> Self {
        Self { segmenter, style }
    }

    pub fn style(&self) -> OutputStyle {
        self.style
    }

    pub fn render(&self, summary: &Summary) -> String {
        let prose = summary.text();
        match self.style {
            OutputStyle::Prose => prose,
            OutputStyle::Bulleted => format_bulleted(self.segmenter, &prose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SummaryKind;

    fn summary(sentences: &[&str]) -> Summary {
        Summary {
            sentences: sentences.iter().map(|s| s.to_string()).collect(),
            sentence_count: sentences.len(),
            word_count: 0,
            kind: SummaryKind::Ranked,
        }
    }

    #[test]
    fn test_prose() {
        let segmenter = Segmenter::english();
        let out = Formatter::new(&segmenter, OutputStyle::Prose)
            .render(&summary(&["The sky is blue.", "Cats are mammals."]));
        assert_eq!(out, "The sky is blue. Cats are mammals.");
    }

    #[test]
    fn test_bulleted() {
        let segmenter = Segmenter::english();
        let out = Formatter::new(&segmenter, OutputStyle::Bulleted)
            .render(&summary(&["The sky is blue.", "Cats are mammals."]));
        assert_eq!(out, "• The sky is blue.\n\n• Cats are mammals.");
    }

    #[test]
    fn test_single_sentence_gives_one_bullet() {
        let segmenter = Segmenter::english();
        let out = format_bulleted(&segmenter, "Only one sentence here");
        assert_eq!(out, "• Only one sentence here");
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_bulleted_resegments_joined_text() {
        let segmenter = Segmenter::english();
        // The second pass sees the joined prose, not the original list.
        let out = Formatter::new(&segmenter, OutputStyle::Bulleted)
            .render(&summary(&["Sentence without period", "Next one."]));
        assert_eq!(out, "• Sentence without period Next one.");
    }

    #[test]
    fn test_empty_summary_renders_empty() {
        let segmenter = Segmenter::english();
        for style in [OutputStyle::Prose, OutputStyle::Bulleted] {
            assert_eq!(Formatter::new(&segmenter, style).render(&Summary::empty()), "");
        }
    }
}

//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackVector, Schema};
use colored::Colorize;

/// Colorize one feedback letter
#[must_use]
pub fn colored_letter(symbol: Feedback) -> String {
    let letter = symbol.letter().to_string();
    match symbol {
        Feedback::Correct => letter.green().bold().to_string(),
        Feedback::Partial => letter.yellow().bold().to_string(),
        Feedback::Incorrect => letter.red().bold().to_string(),
        Feedback::Greater | Feedback::Lower => letter.magenta().bold().to_string(),
    }
}

/// Colorize a whole feedback vector, e.g. "GROH"
#[must_use]
pub fn colored_feedback(vector: &FeedbackVector) -> String {
    vector.symbols().iter().map(|&s| colored_letter(s)).collect()
}

/// One-line legend for the feedback prompt
#[must_use]
pub fn feedback_legend() -> String {
    format!(
        "{}=Correct, {}=Wrong (not for ranges), {}=Partial (not for ranges), {}=Lower (only for ranges), {}=Higher (only for ranges)",
        colored_letter(Feedback::Correct),
        colored_letter(Feedback::Incorrect),
        colored_letter(Feedback::Partial),
        colored_letter(Feedback::Lower),
        colored_letter(Feedback::Greater),
    )
}

/// Per-attribute accepted symbols, shown after invalid feedback
#[must_use]
pub fn invalid_feedback_help(schema: &Schema) -> String {
    let options: Vec<String> = schema
        .scored()
        .iter()
        .map(|attribute| {
            let letters: Vec<String> = Feedback::accepted_for(attribute.kind())
                .iter()
                .map(|s| s.letter().to_string())
                .collect();
            format!("{} - {}", attribute.name(), letters.join(", "))
        })
        .collect();

    format!(
        "Feedback should be {} chars long and match the following properties in the right order:\n{}",
        schema.scored().len(),
        options.join("\n")
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an elimination score as a bar against its pool-size bound
#[must_use]
pub fn score_bar(score: f64, pool_size: usize, width: usize) -> String {
    let max = (pool_size.saturating_sub(1)).max(1) as f64;
    create_progress_bar(score, max, width)
}

//! Console output formatter for conversation transcripts

use botbench_domain::Transcript;
use colored::Colorize;

/// Formats the result set of a run for console display
///
/// Every transcript is rendered, whether the conversation completed all
/// its rounds or ended early on an error.
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format all transcripts under numbered headings
    pub fn format(transcripts: &[Transcript]) -> String {
        let mut output = String::new();

        for (i, transcript) in transcripts.iter().enumerate() {
            output.push_str(&format!(
                "\n{}\n",
                format!("=== Conversation {} ===", i + 1).cyan().bold()
            ));
            output.push_str(&transcript.text);
            output.push('\n');
        }

        output
    }

    /// Format as JSON
    pub fn format_json(transcripts: &[Transcript]) -> String {
        serde_json::to_string_pretty(transcripts).unwrap_or_else(|_| "[]".to_string())
    }
}

//! Turn logs and transcripts - the human-readable record of one conversation

use serde::{Deserialize, Serialize};

/// Ordered log lines accumulated while one conversation executes
///
/// Owned exclusively by the driver running that conversation, so lines
/// from different conversations never interleave.
#[derive(Debug, Default, Clone)]
pub struct TurnLog {
    lines: Vec<String>,
}

impl TurnLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Fold the log into a single displayable transcript
    pub fn into_transcript(self) -> Transcript {
        Transcript {
            text: self.lines.join("\n"),
        }
    }
}

/// The full ordered log of one conversation, as one text block (Value Object)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
}

impl Transcript {
    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }
}

impl std::fmt::Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_joins_lines_in_order() {
        let mut log = TurnLog::new();
        log.push("first");
        log.push("second");
        log.extend(vec!["third".to_string()]);
        let transcript = log.into_transcript();
        assert_eq!(transcript.text, "first\nsecond\nthird");
    }

    #[test]
    fn test_empty_log_yields_empty_transcript() {
        let transcript = TurnLog::new().into_transcript();
        assert!(transcript.text.is_empty());
    }
}

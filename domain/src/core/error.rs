//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Seed prompt cannot be empty")]
    EmptySeedPrompt,

    #[error("Round count must be at least 1, got {0}")]
    InvalidRounds(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rounds_display() {
        let error = DomainError::InvalidRounds(0);
        assert_eq!(error.to_string(), "Round count must be at least 1, got 0");
    }
}

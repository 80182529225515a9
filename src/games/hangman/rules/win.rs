//! Win detection logic for hangman.

use super::super::RevealPattern;
use tracing::instrument;

/// Returns true if no placeholder remains in the pattern.
#[instrument(skip(pattern), fields(pattern = %pattern))]
pub fn check_win(pattern: &RevealPattern) -> bool {
    !pattern.has_placeholders()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_win_with_placeholder() {
        assert!(!check_win(&RevealPattern::from_rendered("c_t")));
    }

    #[test]
    fn test_win_when_resolved() {
        assert!(check_win(&RevealPattern::from_rendered("the quick fox")));
    }
}

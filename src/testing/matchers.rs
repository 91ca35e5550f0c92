//! Text matching utilities for result assertions

/// Text matching strategies for assertions
#[derive(Debug, Clone)]
pub enum TextMatch {
    /// Exact text match
    Exact(String),
    /// Text starts with prefix
    StartsWith(String),
    /// Text contains substring
    Contains(String),
}

impl TextMatch {
    /// Check if the actual text matches this pattern (returns bool)
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix),
            TextMatch::Contains(substring) => actual.contains(substring),
        }
    }

    /// Assert that the actual text matches this pattern
    pub fn assert(&self, actual: &str, context: &str) {
        let expectation = match self {
            TextMatch::Exact(expected) => format!("to be {:?}", expected),
            TextMatch::StartsWith(prefix) => format!("to start with {:?}", prefix),
            TextMatch::Contains(substring) => format!("to contain {:?}", substring),
        };
        assert!(
            self.matches(actual),
            "{}: Expected {}, but got {:?}",
            context,
            expectation,
            actual
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_strategies() {
        assert!(TextMatch::Exact("abc".into()).matches("abc"));
        assert!(!TextMatch::Exact("abc".into()).matches("abcd"));
        assert!(TextMatch::StartsWith("ab".into()).matches("abc"));
        assert!(TextMatch::Contains("bc".into()).matches("abcd"));
    }

    #[test]
    #[should_panic(expected = "data: Expected to start with \"x\", but got \"abc\"")]
    fn assert_reports_context() {
        TextMatch::StartsWith("x".into()).assert("abc", "data");
    }
}

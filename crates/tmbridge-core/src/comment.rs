//! Execution comment formatting
//!
//! Comments are rendered as HTML by both TM4J and Zephyr Scale.

use std::fmt::Display;

/// Separator between comment sections
pub const SECTION_SEPARATOR: &str = "</br></br>";

/// Escape the characters that would open or close an HTML tag
pub fn html_escape(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Builds execution comments for a given environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentFormatter {
    environment: String,
}

impl CommentFormatter {
    /// Create a formatter; the environment label is upper-cased
    pub fn new(environment: Option<&str>) -> Self {
        Self {
            environment: environment.unwrap_or_default().to_uppercase(),
        }
    }

    /// Comment shared by every outcome
    pub fn base(&self, test_id: &str) -> String {
        format!(
            "Environment: {}{}Test method: {}",
            self.environment, SECTION_SEPARATOR, test_id
        )
    }

    /// Comment for a failed test
    pub fn failure(&self, test_id: &str, cause: &dyn Display) -> String {
        format!(
            "{}{}Reason of failure: {}",
            self.base(test_id),
            SECTION_SEPARATOR,
            html_escape(&cause.to_string())
        )
    }

    /// Comment for a disabled test; the reason section is omitted when absent
    pub fn disabled(&self, test_id: &str, reason: Option<&str>) -> String {
        match reason {
            Some(reason) => format!(
                "{}{}Test case has been skipped by: {}",
                self.base(test_id),
                SECTION_SEPARATOR,
                reason
            ),
            None => self.base(test_id),
        }
    }
}

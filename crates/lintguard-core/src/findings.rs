//! Finding type and its output representations.

use std::fmt;

use serde::Serialize;

use crate::patterns::Tool;

/// A single detected suppression directive at a specific file and line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Path exactly as given on the command line.
    pub path: String,
    /// 1-based line number.
    pub line: usize,
    pub tool: Tool,
    /// Canonical directive text from the pattern table.
    pub directive: &'static str,
}

impl fmt::Display for Finding {
    /// `path:line:tool:directive`, the stable stdout format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", self.path, self.line, self.tool, self.directive)
    }
}

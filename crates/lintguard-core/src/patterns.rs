//! Fixed directive pattern table (suppression forms only).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::LinterListError;

/// Lint / type-check tool a directive belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Yamllint,
    Pylint,
    Mypy,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Yamllint, Tool::Pylint, Tool::Mypy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Yamllint => "yamllint",
            Tool::Pylint => "pylint",
            Tool::Mypy => "mypy",
        }
    }

    /// Parse a comma-separated linter list, e.g. `yamllint,mypy`.
    pub fn parse_list(s: &str) -> Result<Vec<Tool>, LinterListError> {
        let mut tools = Vec::new();
        for name in s.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            let tool = name.parse::<Tool>()?;
            if !tools.contains(&tool) {
                tools.push(tool);
            }
        }
        if tools.is_empty() {
            return Err(LinterListError::Empty);
        }
        Ok(tools)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = LinterListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .iter()
            .copied()
            .find(|t| s.eq_ignore_ascii_case(t.as_str()))
            .ok_or_else(|| LinterListError::Unknown(s.to_string()))
    }
}

/// One suppression form: a compiled matcher plus the canonical directive text
/// reported for it.
#[derive(Debug)]
pub struct DirectivePattern {
    pub tool: Tool,
    pub directive: &'static str,
    regex: Regex,
}

impl DirectivePattern {
    fn new(tool: Tool, directive: &'static str, pattern: &str) -> Self {
        Self {
            tool,
            directive,
            regex: Regex::new(pattern).expect("invalid directive pattern"),
        }
    }

    /// Unanchored, case-insensitive search within a single line.
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// The full table, in stable tool order (yamllint, pylint, mypy).
///
/// Bare `disable` entries require a non-hyphen (or end of line) after the
/// keyword so they stay disjoint from the hyphenated forms, and every entry
/// requires the literal suppression keyword, which is what keeps `enable`
/// variants from ever matching.
pub static PATTERNS: LazyLock<Vec<DirectivePattern>> = LazyLock::new(|| {
    vec![
        DirectivePattern::new(
            Tool::Yamllint,
            "yamllint disable-line",
            r"(?i)yamllint\s+disable-line",
        ),
        DirectivePattern::new(
            Tool::Yamllint,
            "yamllint disable-file",
            r"(?i)yamllint\s+disable-file",
        ),
        DirectivePattern::new(
            Tool::Yamllint,
            "yamllint disable",
            r"(?i)yamllint\s+disable(?:[^-]|$)",
        ),
        DirectivePattern::new(
            Tool::Pylint,
            "pylint: disable-next",
            r"(?i)pylint:\s*disable-next",
        ),
        DirectivePattern::new(
            Tool::Pylint,
            "pylint: disable-line",
            r"(?i)pylint:\s*disable-line",
        ),
        DirectivePattern::new(
            Tool::Pylint,
            "pylint: skip-file",
            r"(?i)pylint:\s*skip-file",
        ),
        DirectivePattern::new(
            Tool::Pylint,
            "pylint: disable",
            r"(?i)pylint:\s*disable(?:[^-]|$)",
        ),
        DirectivePattern::new(Tool::Mypy, "type: ignore", r"(?i)type:\s*ignore"),
        DirectivePattern::new(
            Tool::Mypy,
            "mypy: ignore-errors",
            r"(?i)mypy:\s*ignore-errors",
        ),
    ]
});

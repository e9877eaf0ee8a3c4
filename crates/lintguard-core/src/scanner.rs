//! Pure line scanner: no I/O, operates on text already read into memory.

use crate::findings::Finding;
use crate::patterns::{DirectivePattern, Tool, PATTERNS};
use crate::prefilter::line_may_match;

/// Test one line against every pattern for the enabled tools, in table order.
/// Yields one entry per matching pattern; a line can hit several tools.
pub fn scan_line<'a>(
    line: &'a str,
    tools: &'a [Tool],
) -> impl Iterator<Item = &'static DirectivePattern> + 'a {
    PATTERNS
        .iter()
        .filter(move |p| tools.contains(&p.tool) && p.is_match(line))
}

/// Scan full file text for directives of the enabled tools.
///
/// Line numbers are 1-based; `str::lines` handles both `\n` and `\r\n`
/// endings, so numbering follows the file's actual line breaks.
pub fn scan_text(path: &str, text: &str, tools: &[Tool]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if !line_may_match(line) {
            continue;
        }
        for pattern in scan_line(line, tools) {
            findings.push(Finding {
                path: path.to_string(),
                line: idx + 1,
                tool: pattern.tool,
                directive: pattern.directive,
            });
        }
    }
    findings
}

//! Anchor prefilter: cheap substring scan before any regex runs.
//!
//! Every directive form starts with a tool prefix token, so a line containing
//! none of the anchors cannot match any pattern and is skipped outright.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;

const ANCHORS: [&str; 4] = ["yamllint", "pylint:", "type:", "mypy:"];

static ANCHOR_AC: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(ANCHORS)
        .expect("build anchor automaton")
});

/// True if `line` contains at least one tool prefix token.
pub(crate) fn line_may_match(line: &str) -> bool {
    ANCHOR_AC.is_match(line)
}

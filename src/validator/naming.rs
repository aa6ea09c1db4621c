use std::sync::OnceLock;

use regex::Regex;

/// Paper directories are named `YYYY-slug`, e.g. `2026-molsysmt-foundation`.
///
/// `\d` matches any Unicode decimal digit, and one trailing newline is
/// tolerated before the end anchor.
pub const PAPER_DIR_PATTERN: &str = r"^\d{4}-[a-z0-9][a-z0-9-]*\n?$";

fn paper_dir_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PAPER_DIR_PATTERN).expect("paper directory pattern is valid"))
}

/// Returns true if `name` follows the dated paper directory convention.
pub fn is_paper_dir_name(name: &str) -> bool {
    paper_dir_regex().is_match(name)
}

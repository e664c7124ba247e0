//! Column widths and small text helpers shared by the generators.
//!
//! Widths are left-justified minimums; clang-format and reviewers rely on
//! the resulting columns, so they must not drift.

pub const ID_WIDTH: usize = 54;
pub const NAME_MACRO_WIDTH: usize = 40;
pub const AV_FIELD_WIDTH: usize = 20;
pub const AP_WIDTH: usize = 36;
pub const DEFINE_WIDTH: usize = 20;
pub const GS_CASE_WIDTH: usize = 18;
pub const TYPE_WIDTH: usize = 24;
pub const REMAP_WIDTH: usize = 36;
pub const MIN_MAX_WIDTH: usize = 20;
pub const INDEX_NAME_WIDTH: usize = 34;

/// Table flag literal (`y`/`n` are `#define`d to true/false in the table source).
pub fn yes_no(flag: bool) -> char {
    if flag { 'y' } else { 'n' }
}

/// Cut `text` at its last comma and terminate with a newline.
///
/// Without any comma the final character is dropped instead, which turns an
/// empty section into a single blank line.
pub fn strip_last_comma(mut text: String) -> String {
    match text.rfind(',') {
        Some(position) => text.truncate(position),
        None => {
            text.pop();
        }
    }
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_the_last_comma() {
        assert_eq!(strip_last_comma("a,\nb,\n\n".to_string()), "a,\nb\n");
        assert_eq!(strip_last_comma(String::new()), "\n");
        assert_eq!(strip_last_comma("x\n".to_string()), "x\n");
    }

    #[test]
    fn flags() {
        assert_eq!(yes_no(true), 'y');
        assert_eq!(yes_no(false), 'n');
    }
}

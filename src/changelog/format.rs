//! Changelog section rendering - pure functions, no I/O

use crate::error::Result;
use crate::types::MergeInfo;
use chrono::NaiveDate;
use std::fmt::Write;

/// Tag text left in the header for the maintainer to fill in
pub const NEW_TAG_PLACEHOLDER: &str = "NEW_TAG_HERE";

/// Trim `s` and title-case its first character
///
/// The rest of the string is kept verbatim, so "fix API bug" becomes
/// "Fix API bug" rather than "Fix Api Bug".
pub fn title_case(s: &str) -> String {
    let s = s.trim();
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(s.len());
    out.push(simple_titlecase(first));
    out.push_str(chars.as_str());
    out
}

/// Unicode simple title-case mapping of a single character
///
/// Differs from uppercase for the Latin digraphs and the Greek letters with
/// ypogegrammeni. Characters without a single-character mapping are returned
/// unchanged.
fn simple_titlecase(c: char) -> char {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => 'ǅ',
        'Ǉ' | 'ǈ' | 'ǉ' => 'ǈ',
        'Ǌ' | 'ǋ' | 'ǌ' => 'ǋ',
        'Ǳ' | 'ǲ' | 'ǳ' => 'ǲ',
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(u32::from(c) + 8).unwrap_or(c)
        }
        '\u{1FB3}' => '\u{1FBC}',
        '\u{1FC3}' => '\u{1FCC}',
        '\u{1FF3}' => '\u{1FFC}',
        // Georgian Mkhedruli has an uppercase (Mtavruli) but no title case
        '\u{10D0}'..='\u{10FA}' | '\u{10FD}'..='\u{10FF}' => c,
        _ => {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        }
    }
}

/// Render a changelog section dated `date`
///
/// ```text
///
/// ### Tag NEW_TAG_HERE (2024-01-31)
/// * Fix bug. [#42](https://github.com/o/r/pull/42) ([alice](https://github.com/alice))
/// ```
pub fn render_section(merges: &[MergeInfo], date: NaiveDate) -> Result<String> {
    let mut out = String::new();
    writeln!(out)?;
    writeln!(
        out,
        "### Tag {NEW_TAG_PLACEHOLDER} ({})",
        date.format("%Y-%m-%d")
    )?;
    for merge in merges {
        writeln!(out, "{merge}")?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digraph_uses_titlecase_not_uppercase() {
        assert_eq!(title_case("ǆungla"), "ǅungla");
        assert_eq!(title_case("ǅungla"), "ǅungla");
    }

    #[test]
    fn test_multi_char_uppercase_left_alone() {
        assert_eq!(title_case("ßtraße"), "ßtraße");
    }

    #[test]
    fn test_greek_ypogegrammeni() {
        assert_eq!(title_case("\u{1F80}x"), "\u{1F88}x");
    }

    #[test]
    fn test_georgian_mkhedruli_unchanged() {
        assert_eq!(title_case("ა"), "ა");
        assert_eq!(title_case("ჰაერი"), "ჰაერი");
        assert_eq!(title_case("\u{10FD}x"), "\u{10FD}x");
    }

    #[test]
    fn test_non_letter_first_char() {
        assert_eq!(title_case("1.2 release"), "1.2 release");
    }
}

//! Comparison keys for skill names.
//!
//! Two skills are the same skill iff their normalized keys are equal. Every
//! trim in the crate goes through [`trim_skill`] so the whitespace class stays
//! identical between parsing, deduplication, and lookup.

/// Whitespace as browsers define it for `\s` and `String.prototype.trim`:
/// Unicode `White_Space` plus the byte-order mark.
pub fn is_skill_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Trim leading and trailing whitespace using [`is_skill_space`].
pub fn trim_skill(value: &str) -> &str {
    value.trim_matches(is_skill_space)
}

/// Collapse whitespace runs to a single space, trim, and lowercase.
///
/// Total and pure; an empty result means the input carried no skill at all
/// and callers skip it.
pub fn normalize_key(value: &str) -> String {
    let mut collapsed = String::with_capacity(value.len());
    let mut pending_space = false;
    for c in value.chars() {
        if is_skill_space(c) {
            pending_space = true;
            continue;
        }
        if pending_space && !collapsed.is_empty() {
            collapsed.push(' ');
        }
        pending_space = false;
        collapsed.push(c);
    }
    collapsed.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs_and_lowercases() {
        assert_eq!(normalize_key("  Geometry:\t\n Angles  "), "geometry: angles");
        assert_eq!(normalize_key("ALGEBRA"), "algebra");
    }

    #[test]
    fn case_and_spacing_variants_share_a_key() {
        let variants = ["Word Problems", "word   problems", "\tWORD\u{a0}Problems\n"];
        for variant in variants {
            assert_eq!(normalize_key(variant), "word problems", "{variant:?}");
        }
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(normalize_key(""), "");
        assert_eq!(normalize_key(" \n\t\u{feff} "), "");
    }

    #[test]
    fn trim_handles_byte_order_mark() {
        assert_eq!(trim_skill("\u{feff} Fractions \r"), "Fractions");
    }
}

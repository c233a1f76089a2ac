//! Tag stripping and whitespace normalization

use crate::decode_entities;

/// Strip markup tags from text.
///
/// Everything from `<` to the matching `>` is removed, comments and all.
/// An unterminated `<` swallows the rest of the input, the same contract
/// as the platform's own tag stripper. A bare `>` is ordinary text.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        match rest[pos..].find('>') {
            Some(end) => rest = &rest[pos + end + 1..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Collapse every whitespace run (spaces, tabs, newlines, NBSP) to a
/// single space and trim the ends.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() {
            in_run = true;
            continue;
        }
        if in_run && !out.is_empty() {
            out.push(' ');
        }
        in_run = false;
        out.push(c);
    }
    out
}

/// Reduce markup-bearing text to a plain single-line string: strip tags,
/// decode entities, collapse whitespace, trim.
///
/// The pass is repeated until the text stops changing, so the result is a
/// fixed point: normalizing already-normalized text returns it unchanged
/// even when decoding uncovers further entities or tag-shaped text. Each
/// changing pass strictly shortens the string, so the loop terminates.
pub fn normalize(text: &str) -> String {
    let mut current = collapse_whitespace(&decode_entities(&strip_tags(text)));
    loop {
        let next = collapse_whitespace(&decode_entities(&strip_tags(&current)));
        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strip_simple_tags() {
        assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn test_strip_unterminated_tag() {
        assert_eq!(strip_tags("before <img src=\"x"), "before ");
    }

    #[test]
    fn test_bare_gt_is_text() {
        assert_eq!(strip_tags("5 > 3"), "5 > 3");
    }

    #[test]
    fn test_normalize_typical_question_text() {
        let raw = "<p>\u{BF}Cu&aacute;l   es la capital\nde Francia?</p>&nbsp;";
        assert_eq!(normalize(raw), "\u{BF}Cuál es la capital de Francia?");
    }

    #[test]
    fn test_normalize_collapses_newlines() {
        assert_eq!(normalize("a\n\n  b\tc"), "a b c");
    }

    #[test]
    fn test_normalize_empty_and_whitespace_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
        assert_eq!(normalize("<p></p>"), "");
    }

    #[test]
    fn test_unknown_entity_survives() {
        assert_eq!(normalize("a &bogus; b"), "a &bogus; b");
    }

    #[test]
    fn test_double_escaped_reaches_fixed_point() {
        // Decoding uncovers "&lt;b&gt;", then "<b>", which strips away.
        let once = normalize("&amp;lt;b&amp;gt;x");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_no_delimiters_left_for_well_formed_markup() {
        let out = normalize("<div class=\"q\">text<br/>more</div>");
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(s in ".*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once.clone());
        }

        #[test]
        fn prop_normalize_has_no_edge_whitespace(s in ".*") {
            let out = normalize(&s);
            prop_assert_eq!(out.trim(), out.as_str());
            prop_assert!(!out.contains("  "));
        }
    }
}

//! Submission sanitization.
//!
//! Denylist stripping of the characters that would let submitted text
//! alter the structure of the outbound email: `<`, `>`, backticks, `}`
//! and the two-character `${` interpolation opener. This is not full
//! HTML-escaping — `&` and quotes pass through unchanged, a limitation
//! carried over deliberately from the deployed behavior.

/// Strip structure-altering characters from submitted text.
///
/// Single left-to-right pass: `<`, `>`, `` ` `` and `}` are dropped
/// wherever they appear, and a `$` immediately followed by `{` is dropped
/// together with the `{`. A lone `$` or `{` is kept.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '<' | '>' | '`' | '}' => {}
            '$' if chars.peek() == Some(&'{') => {
                chars.next();
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markup_characters() {
        assert_eq!(sanitize("<b>hi</b>"), "bhi/b");
        assert_eq!(sanitize("<script>alert(1)</script>"), "scriptalert(1)/script");
    }

    #[test]
    fn strips_interpolation_sequences() {
        assert_eq!(sanitize("${evil}"), "evil");
        assert_eq!(sanitize("a ${b} c"), "a b c");
        assert_eq!(sanitize("`cmd`"), "cmd");
    }

    #[test]
    fn keeps_lone_dollar_and_brace() {
        assert_eq!(sanitize("price: $5"), "price: $5");
        assert_eq!(sanitize("{json: true"), "{json: true");
    }

    #[test]
    fn idempotent_on_sanitized_input() {
        for input in ["<b>hi</b>", "${evil}", "plain text, nothing odd", "a`b`c${d}e"] {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(sanitize(""), "");
    }
}

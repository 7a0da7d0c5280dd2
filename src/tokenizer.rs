//! Splitting pasted or dropped text into path tokens.
//!
//! Terminals deliver a drag-and-drop as plain text: paths are separated by
//! whitespace and paths containing spaces are usually wrapped in double
//! quotes. A token is either the content of a `"…"` pair or a maximal run of
//! non-whitespace characters, with the quoted form tried first at every
//! position.

use regex::Regex;
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)"|(\S+)"#).expect("token pattern is valid"));

/// Split `text` into path tokens, in order of appearance.
///
/// Never fails. An unbalanced quote is not special: the text around it is
/// split on whitespace and the quote stays part of its token.
///
/// # Examples
///
/// ```
/// use pdfcombine::tokenizer::tokenize;
///
/// let tokens = tokenize(r#"a.pdf "my file.pdf"  /tmp/b.pdf"#);
/// assert_eq!(tokens, vec!["a.pdf", "my file.pdf", "/tmp/b.pdf"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN
        .captures_iter(text.trim())
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

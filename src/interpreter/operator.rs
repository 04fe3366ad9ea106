//! The two string operations behind `+` and `-`.

use super::Operator;

/// Append `right` to `left` with no separator.
pub fn concat(left: &str, right: &str) -> String {
    let mut out = String::with_capacity(left.len() + right.len());
    out.push_str(left);
    out.push_str(right);
    out
}

/// Remove the first literal, case-sensitive occurrence of `right` from `left`.
///
/// Returns `None` when `right` does not occur. `separator` is the text that
/// joins operand words; the seam left behind is tidied so a removed word does
/// not leave a doubled or dangling separator:
///
/// ```
/// use wordfold::interpreter::operator::strike;
///
/// assert_eq!(strike("helloworld", "llowo", " ").as_deref(), Some("herld"));
/// assert_eq!(
///     strike("you know nothing Jon Snow", "nothing", " ").as_deref(),
///     Some("you know Jon Snow")
/// );
/// assert_eq!(strike("a_b_c", "b", "_").as_deref(), Some("a_c"));
/// assert_eq!(strike("abc", "xyz", " "), None);
/// ```
pub fn strike(left: &str, right: &str, separator: &str) -> Option<String> {
    let index = left.find(right)?;
    let mut head = &left[..index];
    let mut tail = &left[index + right.len()..];

    if !separator.is_empty() {
        if head.is_empty() {
            tail = tail.strip_prefix(separator).unwrap_or(tail);
        } else if tail.is_empty() {
            head = head.strip_suffix(separator).unwrap_or(head);
        } else if head.ends_with(separator) && tail.starts_with(separator) {
            tail = &tail[separator.len()..];
        }
    }

    Some(concat(head, tail))
}

/// Apply `op` to the operands. `None` only for a strike whose operand is absent.
pub fn apply(op: Operator, left: &str, right: &str, separator: &str) -> Option<String> {
    match op {
        Operator::Concat => Some(concat(left, right)),
        Operator::Strike => strike(left, right, separator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_has_no_separator() {
        assert_eq!(concat("NA", "BATMAN"), "NABATMAN");
        assert_eq!(concat("", "x"), "x");
    }

    #[test]
    fn strike_removes_only_first_occurrence() {
        assert_eq!(strike("abab", "ab", " ").as_deref(), Some("ab"));
    }

    #[test]
    fn strike_is_case_sensitive() {
        assert_eq!(strike("Hello", "h", " "), None);
        assert_eq!(strike("Hello", "H", " ").as_deref(), Some("ello"));
    }

    #[test]
    fn strike_matches_inside_words() {
        assert_eq!(strike("helloworld", "llowo", " ").as_deref(), Some("herld"));
    }

    #[test]
    fn strike_collapses_doubled_space() {
        assert_eq!(strike("a b c", "b", " ").as_deref(), Some("a c"));
    }

    #[test]
    fn strike_trims_dangling_space_at_edges() {
        assert_eq!(strike("nothing Jon", "nothing", " ").as_deref(), Some("Jon"));
        assert_eq!(strike("Jon nothing", "nothing", " ").as_deref(), Some("Jon"));
    }

    #[test]
    fn strike_tidies_multi_char_separator() {
        assert_eq!(strike("red, green, blue", "green", ", ").as_deref(), Some("red, blue"));
        assert_eq!(strike("red, green", "red", ", ").as_deref(), Some("green"));
    }

    #[test]
    fn strike_tidies_custom_separator() {
        assert_eq!(strike("a_b_c", "b", "_").as_deref(), Some("a_c"));
        assert_eq!(strike("a_b_c", "_b", "_").as_deref(), Some("a_c"));
    }

    #[test]
    fn strike_without_separator_only_removes() {
        assert_eq!(strike("a b c", "b", "").as_deref(), Some("a  c"));
    }

    #[test]
    fn strike_whole_text_leaves_empty() {
        assert_eq!(strike("same", "same", " ").as_deref(), Some(""));
    }

    #[test]
    fn strike_treats_operand_literally() {
        assert_eq!(strike("a.c", ".", " ").as_deref(), Some("ac"));
        assert_eq!(strike("abc", ".", " "), None);
    }

    #[test]
    fn apply_dispatches_on_operator() {
        assert_eq!(apply(Operator::Concat, "a", "b", " ").as_deref(), Some("ab"));
        assert_eq!(apply(Operator::Strike, "ab", "b", " ").as_deref(), Some("a"));
        assert_eq!(apply(Operator::Strike, "ab", "z", " "), None);
    }
}

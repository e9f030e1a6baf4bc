/// Replace every character that is not an ASCII letter or digit with spaces.
///
/// The byte length of the line is preserved: a non-ASCII character becomes
/// one space per UTF-8 byte, so positions and `len()` stay comparable with
/// the unfiltered line.
pub fn filter_alnum(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else {
            out.extend(std::iter::repeat(' ').take(c.len_utf8()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_replaces_punctuation_with_spaces() {
        assert_eq!(filter_alnum("C0de!"), "C0de ");
        assert_eq!(filter_alnum("Hello, World 2023"), "Hello  World 2023");
    }

    #[test]
    fn test_filter_passes_alphanumerics_through() {
        assert_eq!(filter_alnum("abcXYZ0189"), "abcXYZ0189");
    }

    #[test]
    fn test_filter_empty() {
        assert_eq!(filter_alnum(""), "");
    }

    #[test]
    fn test_filter_preserves_length() {
        let samples = [
            "",
            "plain",
            "tab\there",
            "a-b_c.d",
            "naïve café",
            "日本語 123",
            "emoji 🦀!",
            "\r",
        ];
        for s in samples {
            assert_eq!(filter_alnum(s).len(), s.len(), "length changed for {s:?}");
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let samples = ["C0de!", "Hello, World 2023", "naïve café", "--==--", "🦀🦀"];
        for s in samples {
            let once = filter_alnum(s);
            assert_eq!(filter_alnum(&once), once);
        }
    }

    #[test]
    fn test_filter_non_ascii_letters_are_not_alphanumeric() {
        assert_eq!(filter_alnum("é1"), "  1");
    }
}

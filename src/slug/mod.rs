/// Maximum slug length in characters.
pub(crate) const MAX_SLUG_LEN: usize = 100;

/// Derive a URL slug from a post title.
///
/// Rules:
/// - Lowercase the title.
/// - Keep only `a-z`, `0-9`, whitespace and `-`; everything else is dropped
///   (no transliteration for accented letters).
/// - Runs of whitespace become a single hyphen.
/// - Runs of hyphens collapse to one.
/// - No leading or trailing hyphen; at most [`MAX_SLUG_LEN`] characters.
pub(crate) fn derive_slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        let ch = ch.to_ascii_lowercase();

        if ch.is_whitespace() || ch == '-' {
            if !out.is_empty() {
                pending_hyphen = true;
            }
            continue;
        }

        if !ch.is_ascii_lowercase() && !ch.is_ascii_digit() {
            continue;
        }

        // A separator is only emitted together with the character after it,
        // so the cap can never leave a trailing hyphen behind.
        let needed = if pending_hyphen { 2 } else { 1 };
        if out.len() + needed > MAX_SLUG_LEN {
            break;
        }

        if pending_hyphen {
            out.push('-');
            pending_hyphen = false;
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(derive_slug("My First Post! (2024)"), "my-first-post-2024");
    }

    #[test]
    fn test_collapses_and_trims_whitespace() {
        assert_eq!(derive_slug("  multiple   spaces  "), "multiple-spaces");
    }

    #[test]
    fn test_collapses_hyphen_runs() {
        assert_eq!(derive_slug("a -- b---c"), "a-b-c");
    }

    #[test]
    fn test_idempotent_on_derived_output() {
        let once = derive_slug("Hello, World & Friends");
        assert_eq!(derive_slug(&once), once);
    }

    #[test]
    fn test_already_slugged_input_is_a_noop() {
        assert_eq!(derive_slug("hello-world"), "hello-world");
    }

    #[test]
    fn test_drops_underscores_and_non_ascii() {
        assert_eq!(derive_slug("foo_bar"), "foobar");
        assert_eq!(derive_slug("Café déjà vu"), "caf-dj-vu");
    }

    #[test]
    fn test_empty_and_symbol_only_titles() {
        assert_eq!(derive_slug(""), "");
        assert_eq!(derive_slug("!!! ???"), "");
    }

    #[test]
    fn test_caps_length_without_trailing_hyphen() {
        let title = "word ".repeat(50);
        let slug = derive_slug(&title);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with('-'));
        assert!(slug.starts_with("word-word"));
    }

    #[test]
    fn test_output_alphabet() {
        for title in [
            "Ünïcödé — Title!",
            "tabs\tand\nnewlines",
            "100% (pure) JUICE",
            "--edge--case--",
        ] {
            let slug = derive_slug(title);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "bad char in {slug:?}"
            );
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert!(!slug.contains("--"));
        }
    }
}

/// Builds the in-document anchor for a numbered heading.
///
/// The label and the lowercased title are joined with a space, spaces become
/// hyphens, and every character outside `[0-9a-z-]` is dropped. The result is
/// prefixed with `#`.
///
/// # Examples
///
/// ```
/// use numtoc_core::slug::anchor_slug;
///
/// assert_eq!(anchor_slug("2.1.", "My Section!"), "#21-my-section");
/// assert_eq!(anchor_slug("1.", "Overview"), "#1-overview");
/// ```
pub fn anchor_slug(label: &str, title: &str) -> String {
    let mut slug = String::with_capacity(label.len() + title.len() + 2);
    slug.push('#');

    let text = format!("{} {}", label, title.to_lowercase());
    for ch in text.chars() {
        match ch {
            ' ' | '-' => slug.push('-'),
            '0'..='9' | 'a'..='z' => slug.push(ch),
            // Punctuation, dots, uppercase leftovers and non-ASCII are dropped
            _ => {}
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_basic() {
        assert_eq!(anchor_slug("1.", "Hello World"), "#1-hello-world");
    }

    #[test]
    fn punctuation_dropped() {
        assert_eq!(anchor_slug("2.1.", "My Section!"), "#21-my-section");
    }

    #[test]
    fn zero_filled_label() {
        assert_eq!(anchor_slug("1.0.1.", "Deep"), "#101-deep");
    }

    #[test]
    fn no_collapsing_or_trimming() {
        assert_eq!(anchor_slug("1.", "a -- b "), "#1-a----b-");
    }

    #[test]
    fn non_ascii_dropped() {
        assert_eq!(anchor_slug("3.", "Héllo Wörld"), "#3-hllo-wrld");
        assert_eq!(anchor_slug("1.", "多言語 ガイド"), "#1--");
    }

    #[test]
    fn empty_title() {
        assert_eq!(anchor_slug("4.", ""), "#4-");
    }

    #[test]
    fn parity_table() {
        let cases: Vec<(&str, &str, &str)> = vec![
            ("1.", "A", "#1-a"),
            ("1.1.", "AA", "#11-aa"),
            ("1.1.1.", "AAA", "#111-aaa"),
            ("2.", "import.meta.glob", "#2-importmetaglob"),
            ("3.", "TypeScript & JSX", "#3-typescript--jsx"),
            ("4.", "Using __dirname", "#4-using-dirname"),
            ("10.2.", "Why Rust?", "#102-why-rust"),
        ];

        for (label, title, expected) in &cases {
            let actual = anchor_slug(label, title);
            assert_eq!(
                &actual, expected,
                "Mismatch for {:?} {:?}: got {:?}, expected {:?}",
                label, title, actual, expected
            );
        }
    }
}

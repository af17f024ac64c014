//! Pure page-splitting math for the paginator.

/// A single page: the entries it shows, each already suffixed with the line separator.
pub type Page = Vec<String>;

/// Compute the number of pages needed to show `entry_count` entries, `page_size` at a time.
pub fn page_count(entry_count: usize, page_size: usize) -> usize {
    entry_count.div_ceil(page_size.max(1))
}

/// Split `entries` into consecutive pages of at most `page_size` entries.
///
/// Every entry gets `separator` appended. The input slice is left untouched, so a
/// caller can split the same entries again (for example after `clear`).
pub fn split_pages(entries: &[String], page_size: usize, separator: &str) -> Vec<Page> {
    entries
        .chunks(page_size.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(|entry| format!("{entry}{separator}"))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn entries(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test_case(0, 1, 0 ; "no entries")]
    #[test_case(1, 1, 1 ; "single entry")]
    #[test_case(5, 2, 3 ; "remainder page")]
    #[test_case(6, 2, 3 ; "exact fit")]
    #[test_case(3, 10, 1 ; "page larger than entries")]
    fn test_page_count(len: usize, size: usize, expected: usize) {
        assert_eq!(page_count(len, size), expected);
    }

    /// Five entries two per page leave a one-entry last page.
    #[test]
    fn test_split_with_remainder() {
        let pages = split_pages(&entries(&["a", "b", "c", "d", "e"]), 2, "\n");

        assert_eq!(
            pages,
            vec![
                vec!["a\n".to_string(), "b\n".to_string()],
                vec!["c\n".to_string(), "d\n".to_string()],
                vec!["e\n".to_string()],
            ]
        );
    }

    #[test]
    fn test_split_empty() {
        assert!(split_pages(&[], 3, "\n").is_empty());
    }

    /// Joining every page back together (minus separators) gives the original order.
    #[test]
    fn test_split_preserves_order() {
        let input: Vec<String> = (0..23).map(|i| format!("entry {i}")).collect();

        for size in 1..=7 {
            let pages = split_pages(&input, size, "|");
            assert_eq!(pages.len(), page_count(input.len(), size));

            let flattened: Vec<String> = pages
                .into_iter()
                .flatten()
                .map(|entry| entry.trim_end_matches('|').to_string())
                .collect();
            assert_eq!(flattened, input);
        }
    }

    #[test]
    fn test_custom_separator() {
        let pages = split_pages(&entries(&["x", "y"]), 5, " | ");
        assert_eq!(pages, vec![vec!["x | ".to_string(), "y | ".to_string()]]);
    }
}

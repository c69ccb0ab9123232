//! Order-preserving style-token merge.

use std::collections::HashSet;

/// Merge class strings into one, keeping the first occurrence of each token.
///
/// Every part is split on whitespace; empty tokens disappear and the result is
/// joined with single spaces. Tokens that style the same CSS property but
/// differ textually (`rounded-md`, `rounded-lg`) are both kept; the cascade
/// decides between them.
pub fn merge_tokens<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut merged = String::new();

    for part in parts {
        for token in part.as_ref().split_whitespace() {
            if !seen.insert(token.to_string()) {
                continue;
            }
            if !merged.is_empty() {
                merged.push(' ');
            }
            merged.push_str(token);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keeps_first_occurrence_and_collapses_whitespace() {
        assert_eq!(
            merge_tokens(["  flex  gap-2\tflex", "", "gap-2\nitems-center "]),
            "flex gap-2 items-center"
        );
    }

    #[test]
    fn conflicting_property_tokens_are_both_kept() {
        assert_eq!(
            merge_tokens(["rounded-md p-2", "rounded-lg"]),
            "rounded-md p-2 rounded-lg"
        );
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(merge_tokens(Vec::<String>::new()), "");
        assert_eq!(merge_tokens(["   ", "\t"]), "");
    }

    #[test]
    fn accepts_owned_strings() {
        let parts = vec![String::from("text-sm"), String::from("text-sm font-medium")];
        assert_eq!(merge_tokens(&parts), "text-sm font-medium");
    }
}

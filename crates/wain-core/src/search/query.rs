//! FTS5 query building

use super::normalize;

/// Build an FTS5 match expression from raw user input.
///
/// Each whitespace-separated word becomes a quoted prefix clause (`"word"*`)
/// and the clauses are ANDed, so every word must match somewhere in the
/// indexed text. Quoting keeps user input from being parsed as FTS5 syntax;
/// embedded double quotes are doubled per the FTS5 string rules.
///
/// Returns `None` when no searchable terms survive normalization.
pub fn build_fts_query(raw_text: &str) -> Option<String> {
    let normalized = normalize(raw_text);
    let clauses: Vec<String> = normalized
        .split_whitespace()
        .map(|word| format!("\"{}\"*", word.replace('"', "\"\"")))
        .collect();

    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(" AND "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_expression() {
        assert_eq!(build_fts_query(""), None);
        assert_eq!(build_fts_query("   "), None);
        assert_eq!(build_fts_query(" \t\n "), None);
    }

    #[test]
    fn test_single_word_prefix_clause() {
        assert_eq!(build_fts_query("قهوة"), Some("\"قهوه\"*".to_string()));
    }

    #[test]
    fn test_multi_word_and_logic() {
        assert_eq!(
            build_fts_query("كافيه العليا"),
            Some("\"كافيه\"* AND \"العليا\"*".to_string())
        );
    }

    #[test]
    fn test_double_quote_escaping() {
        let expr = build_fts_query("ca\"fe").unwrap();
        assert_eq!(expr, "\"ca\"\"fe\"*");
    }

    #[test]
    fn test_normalizes_before_building() {
        assert_eq!(build_fts_query("أحمد"), build_fts_query("احمد"));
    }
}

//! Arabic text normalization
//!
//! Canonicalizes input so search and keyword matching are insensitive to
//! diacritics, hamza spelling variants and typographic elongation.

/// Tashkeel and other Arabic combining marks stripped before matching
fn is_diacritic(c: char) -> bool {
    matches!(c,
        '\u{0610}'..='\u{061A}'
            | '\u{064B}'..='\u{065F}'
            | '\u{0670}'
            | '\u{06D6}'..='\u{06DC}'
            | '\u{06DF}'..='\u{06E4}'
            | '\u{06E7}'..='\u{06E8}'
            | '\u{06EA}'..='\u{06ED}')
}

/// Normalize text for matching.
///
/// Lowercases, folds hamza-bearing alef variants to bare alef, folds final
/// taa marbuta to haa, strips tashkeel and tatweel, and collapses runs of
/// whitespace. Pure and idempotent; non-Arabic input comes back trimmed.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = false;

    for c in text.chars() {
        for c in c.to_lowercase() {
            let c = match c {
                // Hamza folding: آ أ إ ٱ → ا
                '\u{0622}' | '\u{0623}' | '\u{0625}' | '\u{0671}' => '\u{0627}',
                // ة → ه
                '\u{0629}' => '\u{0647}',
                // Tatweel
                '\u{0640}' => continue,
                c if is_diacritic(c) => continue,
                c if c.is_whitespace() => {
                    if !last_was_space && !out.is_empty() {
                        out.push(' ');
                        last_was_space = true;
                    }
                    continue;
                }
                c => c,
            };
            out.push(c);
            last_was_space = false;
        }
    }

    if out.ends_with(' ') {
        out.pop();
    }
    out
}

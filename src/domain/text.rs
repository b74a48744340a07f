//! Accent folding and comparison helpers shared by the classifiers

/// Replacement for a single character, or `None` if it is left as-is.
fn fold_char(c: char) -> Option<&'static str> {
    let folded = match c {
        'ä' => "ae",
        'ö' => "oe",
        'ü' => "ue",
        'Ä' => "Ae",
        'Ö' => "Oe",
        'Ü' => "Ue",
        'ß' => "ss",
        'á' | 'à' | 'â' => "a",
        'é' | 'è' | 'ê' => "e",
        'í' | 'ì' | 'î' => "i",
        'ó' | 'ò' | 'ô' => "o",
        'ú' | 'ù' | 'û' => "u",
        'Á' | 'À' | 'Â' => "A",
        'É' | 'È' | 'Ê' => "E",
        'Í' | 'Ì' | 'Î' => "I",
        'Ó' | 'Ò' | 'Ô' => "O",
        'Ú' | 'Ù' | 'Û' => "U",
        _ => return None,
    };
    Some(folded)
}

/// Fold umlauts, sharp s and accented vowels into plain ASCII spellings.
///
/// Case is preserved; callers lowercase separately when they need to.
///
/// ```
/// use moodlog::domain::text::normalize;
///
/// assert_eq!(normalize("Glücklich"), "Gluecklich");
/// assert_eq!(normalize("café"), "cafe");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match fold_char(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// Lowercase, then fold.
pub fn fold_lower(text: &str) -> String {
    normalize(&text.to_lowercase())
}

/// Comparison key: trimmed, whitespace runs collapsed, lowercased and folded.
pub fn comparison_key(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    fold_lower(&collapsed)
}

/// Turns a free-text territory name into a filename-safe slug: lowercase,
/// diacritics transliterated, runs of whitespace/punctuation collapsed to `-`.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_sep = false;

    for ch in input.chars() {
        if ch.is_whitespace() || matches!(ch, '-' | '_' | '/' | '.' | ',' | ':' | ';') {
            pending_sep = true;
            continue;
        }

        let Some(mapped) = transliterate(ch) else {
            continue;
        };

        if pending_sep && !out.is_empty() {
            out.push('-');
        }
        pending_sep = false;
        out.push_str(mapped);
    }

    out
}

fn transliterate(ch: char) -> Option<&'static str> {
    if ch.is_ascii_alphanumeric() {
        return Some(ascii_lower(ch));
    }

    let mapped = match ch {
        'ä' | 'Ä' | 'à' | 'á' | 'â' | 'ã' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Å' => "a",
        'ö' | 'Ö' | 'ò' | 'ó' | 'ô' | 'õ' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ø' => "o",
        'ü' | 'Ü' | 'ù' | 'ú' | 'û' | 'Ù' | 'Ú' | 'Û' => "u",
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
        'ß' => "ss",
        'ç' | 'Ç' => "c",
        'ñ' | 'Ñ' => "n",
        _ => return None,
    };
    Some(mapped)
}

// Static str per ASCII alphanumeric so slugify can push without allocating.
fn ascii_lower(ch: char) -> &'static str {
    const TABLE: &str = "abcdefghijklmnopqrstuvwxyz0123456789";
    let idx = match ch {
        'a'..='z' => ch as usize - 'a' as usize,
        'A'..='Z' => ch as usize - 'A' as usize,
        '0'..='9' => 26 + (ch as usize - '0' as usize),
        _ => unreachable!("caller checked is_ascii_alphanumeric"),
    };
    &TABLE[idx..idx + 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_german_name() {
        assert_eq!(slugify("Nord Straße 1"), "nord-strasse-1");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  Alt -  Moabit  "), "alt-moabit");
    }

    #[test]
    fn test_slugify_drops_unknown_symbols() {
        assert_eq!(slugify("Gebiet №7 (Süd)"), "gebiet-7-sud");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
    }
}

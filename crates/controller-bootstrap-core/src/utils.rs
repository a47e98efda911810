//! Identifier helpers

/// Split an identifier into words at case changes, digits and separators.
///
/// Acronyms stay together: `DBInstance` splits into `DB` and `Instance`.
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if ch.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("DBInstance"), vec!["DB", "Instance"]);
        assert_eq!(split_words("findPetsByStatus"), vec!["find", "Pets", "By", "Status"]);
        assert_eq!(split_words("S3Bucket"), vec!["S3", "Bucket"]);
        assert_eq!(split_words("get HTTP-Response"), vec!["get", "HTTP", "Response"]);
        assert!(split_words("__").is_empty());
    }
}

/// Builds the concat string from harvested letters.
///
/// The letters are reversed, so the last letter seen in the input comes
/// first, then cased upper/lower alternately starting with upper.
pub fn derive_concat_string(letters: &[char]) -> String {
    letters
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, ch)| {
            if idx % 2 == 0 {
                ch.to_ascii_uppercase()
            } else {
                ch.to_ascii_lowercase()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(derive_concat_string(&[]), "");
    }

    #[test]
    fn test_reverses_and_alternates() {
        let letters: Vec<char> = "aRy".chars().collect();
        assert_eq!(derive_concat_string(&letters), "YrA");
    }

    #[test]
    fn test_single_letter_is_uppercased() {
        assert_eq!(derive_concat_string(&['q']), "Q");
    }
}

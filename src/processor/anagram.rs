use super::Processor;

/// Sorts the characters of `word` by their scalar value.
///
/// Two words are anagrams of each other iff their keys are equal. No case
/// folding or normalization happens here, so `Abc` and `abc` differ.
pub fn canonical_key(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Keys trimmed words by their sorted characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnagramProcessor;

impl Processor for AnagramProcessor {
    type Key = String;

    fn key(&self, record: &str) -> Self::Key {
        canonical_key(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_characters() {
        assert_eq!(canonical_key("cab"), "abc");
        assert_eq!(canonical_key("zxy"), "xyz");
        assert_eq!(canonical_key("listen"), canonical_key("silent"));
    }

    #[test]
    fn empty_word_has_empty_key() {
        assert_eq!(canonical_key(""), "");
    }

    #[test]
    fn key_is_idempotent() {
        for word in ["banana", "Zebra", "a b c", "ééa", ""] {
            let key = canonical_key(word);
            assert_eq!(canonical_key(&key), key);
        }
    }

    #[test]
    fn key_ignores_permutation() {
        let word = "stressed";
        let reversed: String = word.chars().rev().collect();
        let rotated = format!("{}{}", &word[3..], &word[..3]);
        assert_eq!(canonical_key(word), canonical_key(&reversed));
        assert_eq!(canonical_key(word), canonical_key(&rotated));
    }

    #[test]
    fn case_is_significant() {
        assert_eq!(canonical_key("Abc"), "Abc");
        assert_eq!(canonical_key("abc"), "abc");
        assert_ne!(canonical_key("Abc"), canonical_key("abc"));
        assert_eq!(canonical_key("cbA"), "Abc");
    }

    #[test]
    fn parse_trims_before_keying() {
        let (key, word) = AnagramProcessor.parse("  tac \r");
        assert_eq!(word, "tac");
        assert_eq!(key, "act");
    }

    #[test]
    fn group_output_keeps_first_seen_order() {
        let pairs = ["def", "abc", "fed", "cab", "def"]
            .iter()
            .map(|w| AnagramProcessor.parse(w));
        let groups = AnagramProcessor::group_output(pairs);

        let keys: Vec<_> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["def", "abc"]);
        assert_eq!(groups["def"], vec!["def", "fed", "def"]);
        assert_eq!(groups["abc"], vec!["abc", "cab"]);
    }
}

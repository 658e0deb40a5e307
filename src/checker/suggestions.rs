use crate::checker::dictionary::Dictionary;
use crate::checker::distance::distance_within_chars;

pub const DEFAULT_MAX_DISTANCE: usize = 2;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate {
    word: String,
    distance: usize,
}

/// Rank dictionary words by edit distance to `word`.
///
/// Keeps entries with `0 < distance <= max_distance`, sorted by ascending
/// distance. Equal distances keep dictionary order, which is lexicographic.
/// At most `max_suggestions` words come back; the list is never padded.
pub fn generate(
    word: &str,
    dictionary: &Dictionary,
    max_distance: usize,
    max_suggestions: usize,
) -> Vec<String> {
    let word_chars: Vec<char> = word.chars().collect();
    let mut candidates = Vec::new();

    dictionary.for_each_word(|entry| {
        // Length pruning happens inside the bounded distance
        if let Some(distance) = distance_within_chars(&word_chars, entry, max_distance) {
            if distance > 0 {
                candidates.push(Candidate {
                    word: entry.to_string(),
                    distance,
                });
            }
        }
    });

    log::trace!(
        "suggest: {} candidates within {} of {:?}",
        candidates.len(),
        max_distance,
        word
    );

    // Stable sort keeps dictionary order among ties
    candidates.sort_by_key(|c| c.distance);
    candidates.truncate(max_suggestions);

    candidates.into_iter().map(|c| c.word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::distance::distance;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().copied()).unwrap()
    }

    #[test]
    fn test_ranks_by_distance() {
        let d = dict(&["world", "word", "would", "wild", "hello"]);
        let suggestions = generate("wrold", &d, 2, 5);

        // All four are two edits away
        assert_eq!(suggestions, vec!["wild", "word", "world", "would"]);
        assert!(!suggestions.contains(&"hello".to_string()));

        let distances: Vec<usize> = suggestions.iter().map(|s| distance("wrold", s)).collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_ties_are_lexicographic() {
        let d = dict(&["cot", "bat", "cut", "hat", "cab"]);
        assert_eq!(generate("cat", &d, 1, 5), vec!["bat", "cab", "cot", "cut", "hat"]);
    }

    #[test]
    fn test_truncates_without_padding() {
        let d = dict(&["bat", "cab", "cot", "cut", "hat", "mat", "rat", "zebra"]);
        assert_eq!(generate("cat", &d, 1, 5).len(), 5);
        assert_eq!(generate("cat", &d, 1, 2), vec!["bat", "cab"]);
        assert!(generate("xyzzy", &d, 2, 5).is_empty());
    }

    #[test]
    fn test_excludes_exact_match() {
        let d = dict(&["cat", "cart"]);
        assert_eq!(generate("cat", &d, 2, 5), vec!["cart"]);
    }

    #[test]
    fn test_matches_unpruned_scan() {
        let words = [
            "a", "an", "and", "ant", "hand", "band", "bend", "brand", "grand", "sand", "sandy",
            "strand", "stand",
        ];
        let d = dict(&words);

        let mut sorted = words.to_vec();
        sorted.sort();

        for query in ["and", "snad", "bnad", "x", "standard", ""] {
            let mut expected: Vec<(&str, usize)> = sorted
                .iter()
                .map(|w| (*w, distance(query, w)))
                .filter(|(_, dist)| *dist > 0 && *dist <= 2)
                .collect();
            expected.sort_by_key(|(_, dist)| *dist);
            let expected: Vec<String> =
                expected.into_iter().take(5).map(|(w, _)| w.to_string()).collect();

            assert_eq!(generate(query, &d, 2, 5), expected, "query {:?}", query);
        }
    }
}

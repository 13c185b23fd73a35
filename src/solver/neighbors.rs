//! One-step neighbor enumeration
//!
//! Scans the whole dictionary for words exactly one position away, skipping
//! words the caller has already used on its current path.

use crate::core::{Word, is_neighbor};
use crate::dictionary::{Dictionary, DictionaryError};
use rayon::prelude::*;

/// Find every dictionary word at distance 1 from `word` that is not excluded
///
/// Results come back in dictionary order. In-memory dictionaries are scanned
/// in parallel; the ordering is the same either way.
///
/// # Errors
///
/// Returns `DictionaryError` if the dictionary cannot be read.
///
/// # Examples
/// ```
/// use word_ladder::dictionary::WordList;
/// use word_ladder::solver::neighbors;
///
/// let dict = WordList::from_slice(&["cat", "cot", "bat", "dog"]);
/// let found = neighbors(&dict, "cat", |w| w == "bat").unwrap();
///
/// let texts: Vec<&str> = found.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["cot"]);
/// ```
pub fn neighbors<D, F>(
    dictionary: &D,
    word: &str,
    is_excluded: F,
) -> Result<Vec<Word>, DictionaryError>
where
    D: Dictionary,
    F: Fn(&str) -> bool + Sync,
{
    if let Some(words) = dictionary.as_slice() {
        return Ok(words
            .par_iter()
            .filter(|candidate| {
                is_neighbor(word, candidate.text()) && !is_excluded(candidate.text())
            })
            .cloned()
            .collect());
    }

    let mut found = Vec::new();
    dictionary.scan(|candidate| {
        if is_neighbor(word, candidate.text()) && !is_excluded(candidate.text()) {
            found.push(candidate.clone());
        }
    })?;
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::distance;
    use crate::dictionary::{FileDictionary, WordList};
    use rustc_hash::FxHashSet;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn finds_one_position_changes() {
        let dict = WordList::from_slice(&["cat", "cot", "cog", "dog", "bat", "cats", "at"]);
        let found = neighbors(&dict, "cat", |_| false).unwrap();

        // "cats" adds a trailing position, which counts as a single difference
        assert_eq!(texts(&found), ["cot", "bat", "cats"]);
        assert!(found.iter().all(|w| distance("cat", w.text()) == 1));
    }

    #[test]
    fn excludes_path_words() {
        let dict = WordList::from_slice(&["cat", "cot", "bat", "hat"]);
        let path: FxHashSet<&str> = ["cot", "hat"].into_iter().collect();

        let found = neighbors(&dict, "cat", |w| path.contains(w)).unwrap();
        assert_eq!(texts(&found), ["bat"]);
    }

    #[test]
    fn word_is_never_its_own_neighbor() {
        let dict = WordList::from_slice(&["cat"]);
        assert!(neighbors(&dict, "cat", |_| false).unwrap().is_empty());
    }

    #[test]
    fn case_counts_as_a_difference() {
        let dict = WordList::from_slice(&["Cat", "cAt", "CAT"]);
        let found = neighbors(&dict, "cat", |_| false).unwrap();
        assert_eq!(texts(&found), ["Cat", "cAt"]);
    }

    #[test]
    fn streaming_and_in_memory_agree() {
        let entries = ["cold", "cord", "card", "ward", "warm", "cole", "bold", "colt"];
        let path = std::env::temp_dir().join(format!(
            "word_ladder_neighbors_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, entries.join("\n")).unwrap();

        let memory = WordList::from_slice(&entries);
        let stream = FileDictionary::new(&path);

        let from_memory = neighbors(&memory, "cold", |w| w == "bold").unwrap();
        let from_stream = neighbors(&stream, "cold", |w| w == "bold").unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(from_memory, from_stream);
        assert_eq!(texts(&from_memory), ["cord", "cole", "colt"]);
    }
}

use std::collections::{BTreeSet, HashMap};

use crate::types::{CharCountVector, TermRef};

/// Build the pair of character-frequency vectors for two terms.
///
/// Both vectors are aligned to the union alphabet of the pair, with one slot
/// per distinct character in ascending `char` order so the layout is
/// deterministic. Each slot holds how many times that character occurs in
/// the respective term.
pub fn char_frequency_vectors(s1: &TermRef, s2: &TermRef) -> (CharCountVector, CharCountVector) {
    let alphabet: BTreeSet<char> = s1.chars().chain(s2.chars()).collect();

    (char_counts(s1, &alphabet), char_counts(s2, &alphabet))
}

fn char_counts(term: &TermRef, alphabet: &BTreeSet<char>) -> CharCountVector {
    let mut counts: HashMap<char, u32> = HashMap::new();
    for c in term.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    alphabet
        .iter()
        .map(|c| counts.get(c).copied().unwrap_or(0))
        .collect()
}

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a term as an owned `String`. Terms are the short character
/// sequences the similarity measures operate on.
pub type Term = String;

/// Represents a borrowed view of a term as a `str`. This is used when ownership is not required.
pub type TermRef = str;

/// A normalized similarity score. Every measure in this crate stays within
/// the closed interval `[0, 1]`.
pub type SimilarityScore = f64;

/// Per-character occurrence counts for a term, aligned to the union alphabet
/// of a term pair. Produced by `char_frequency_vectors`.
pub type CharCountVector = Vec<u32>;

/// A list of candidate terms to rank against a query.
pub type TermList = Vec<Term>;

/// Ranked `(term, score)` pairs, ordered by score descending with ties
/// broken by term ascending.
pub type RankedTerms = Vec<(Term, SimilarityScore)>;

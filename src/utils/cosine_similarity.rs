use crate::types::{SimilarityScore, TermRef};
use crate::utils::char_frequency_vectors;

/// Calculate cosine similarity between two aligned count vectors.
///
/// Returns `0.0` when either vector has zero magnitude.
pub fn cosine_similarity(v1: &[u32], v2: &[u32]) -> SimilarityScore {
    assert_eq!(
        v1.len(),
        v2.len(),
        "Vectors must have the same length for cosine similarity"
    );

    // Use iterators to reduce redundant passes through the vectors
    let (dot_product, magnitude_v1_sq, magnitude_v2_sq) =
        v1.iter()
            .zip(v2)
            .fold((0u64, 0u64, 0u64), |(dot, mag1, mag2), (&a, &b)| {
                (
                    dot + (a as u64 * b as u64),
                    mag1 + (a as u64 * a as u64),
                    mag2 + (b as u64 * b as u64),
                )
            });

    let magnitude_v1 = (magnitude_v1_sq as f64).sqrt();
    let magnitude_v2 = (magnitude_v2_sq as f64).sqrt();

    if magnitude_v1 == 0.0 || magnitude_v2 == 0.0 {
        return 0.0;
    }

    dot_product as f64 / (magnitude_v1 * magnitude_v2)
}

/// Calculate cosine similarity between two terms by treating each as a bag
/// of characters.
///
/// Unlike `jaccard_similarity_chars`, repetition counts matter here: `"aab"`
/// and `"abb"` share the same distinct characters but score below `1.0`.
/// An empty term yields a zero-magnitude vector and therefore a score of
/// `0.0`.
pub fn cosine_similarity_chars(s1: &TermRef, s2: &TermRef) -> SimilarityScore {
    let (v1, v2) = char_frequency_vectors(s1, s2);

    cosine_similarity(&v1, &v2)
}

use std::collections::HashSet;

use crate::types::{SimilarityScore, TermRef};

/// Compute the Jaccard similarity between two terms by treating their
/// characters as sets.
///
/// Repeated characters are suppressed before comparison, so only the first
/// occurrence of each character value contributes to the result: `"aa"` and
/// `"a"` compare as identical. The score is `|A ∩ B| / |A ∪ B|` over the
/// distinct-character sets and always falls within `[0, 1]`.
///
/// When both terms are empty the union is empty and the ratio would divide
/// by zero; the score is defined as `0.0` by convention in that case.
///
/// ### Example:
/// ```rust
/// use overlap_measures::jaccard_similarity_chars;
///
/// // distinct("night") = {n,i,g,h,t}, distinct("nacht") = {n,a,c,h,t},
/// // shared = {n,h,t}, union = 7
/// let score = jaccard_similarity_chars("night", "nacht");
/// assert!((score - 3.0 / 7.0).abs() < 1e-9);
/// ```
pub fn jaccard_similarity_chars(s1: &TermRef, s2: &TermRef) -> SimilarityScore {
    let set1: HashSet<char> = s1.chars().collect();
    let set2: HashSet<char> = s2.chars().collect();

    let intersection_size = set1.intersection(&set2).count();
    let union_size = set1.union(&set2).count();

    if union_size == 0 {
        0.0 // Avoid division by zero if both sets are empty
    } else {
        intersection_size as SimilarityScore / union_size as SimilarityScore
    }
}

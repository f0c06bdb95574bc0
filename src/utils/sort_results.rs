use crate::types::RankedTerms;

/// Sorts scored terms into presentation order.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by score in descending order (best match first).
/// - **Secondary:** If two terms have the same score, sorts by term in
///   ascending lexicographical order for deterministic ordering.
///
/// ### Example:
/// ```rust
/// use overlap_measures::sort_results;
///
/// let scored = vec![
///     ("nicht".to_string(), 0.25),
///     ("night".to_string(), 1.0),
///     ("nacht".to_string(), 0.25),
/// ];
///
/// let sorted = sort_results(scored);
/// assert_eq!(sorted, vec![
///     ("night".to_string(), 1.0),
///     ("nacht".to_string(), 0.25),
///     ("nicht".to_string(), 0.25),
/// ]);
/// ```
pub fn sort_results(mut results: RankedTerms) -> RankedTerms {
    results.sort_by(|a, b| {
        b.1.partial_cmp(&a.1) // Sort by score (descending)
            .unwrap_or(std::cmp::Ordering::Equal) // Handle NaN gracefully
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by term (ascending)
    });

    results
}

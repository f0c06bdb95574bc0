mod constants;
pub mod models;
pub use constants::DEFAULT_TERM_RANKER_CONFIG;
pub use models::{Error, TermRanker, TermRankerConfig};
pub mod types;
mod utils;
pub use types::{CharCountVector, RankedTerms, SimilarityScore, Term, TermList, TermRef};
pub use utils::{
    char_frequency_vectors, cosine_similarity, cosine_similarity_chars, jaccard_similarity_chars,
    read_term_list_from_file, read_term_list_from_reader, read_term_list_from_string, sort_results,
};

/// Rank candidate terms against a query by character-frequency cosine
/// similarity, using the default ranking configuration.
pub fn rank_terms(query: &TermRef, candidates: &[Term]) -> Result<RankedTerms, Error> {
    let ranked_terms =
        rank_terms_with_custom_config(query, candidates, DEFAULT_TERM_RANKER_CONFIG)?;

    Ok(ranked_terms)
}

/// Same as `rank_terms`, but with caller-supplied thresholds and result
/// limits.
pub fn rank_terms_with_custom_config(
    query: &TermRef,
    candidates: &[Term],
    term_ranker_config: TermRankerConfig,
) -> Result<RankedTerms, Error> {
    let term_ranker = TermRanker::new(term_ranker_config);

    term_ranker.rank(query, candidates)
}

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

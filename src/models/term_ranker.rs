use log::debug;

use crate::constants::DEFAULT_TERM_RANKER_CONFIG;
use crate::models::Error;
use crate::types::{RankedTerms, SimilarityScore, Term, TermRef};
use crate::utils::{cosine_similarity_chars, sort_results};

#[derive(Copy, Clone)]
pub struct TermRankerConfig {
    /// Candidates scoring at or below this value are dropped from the
    /// results. Zero keeps every candidate sharing at least one character
    /// with the query.
    pub min_score_threshold: SimilarityScore,
    /// Maximum number of ranked results to return, applied after sorting.
    /// `None` returns every candidate that clears the threshold.
    pub max_results: Option<usize>,
}

/// Scores candidate terms against a query by character-frequency cosine
/// similarity and returns them as a ranked list.
pub struct TermRanker {
    config: TermRankerConfig,
}

impl TermRanker {
    pub fn new(config: TermRankerConfig) -> Self {
        Self { config }
    }

    /// Score every candidate against the query and return the ranked list.
    ///
    /// Results are ordered by score descending; candidates with equal scores
    /// are ordered by term ascending so the output is deterministic.
    ///
    /// A query with no characters cannot be scored and yields a
    /// `QueryError`.
    pub fn rank(&self, query: &TermRef, candidates: &[Term]) -> Result<RankedTerms, Error> {
        if query.chars().next().is_none() {
            return Err(Error::QueryError(
                "Cannot rank candidates against an empty query".to_string(),
            ));
        }

        let mut scored: RankedTerms = candidates
            .iter()
            .map(|candidate| {
                let score = cosine_similarity_chars(query, candidate);
                (candidate.to_owned(), score)
            })
            .filter(|(_, score)| *score > self.config.min_score_threshold)
            .collect();

        debug!(
            "Scored {} candidates against query \"{}\"; {} cleared the threshold",
            candidates.len(),
            query,
            scored.len()
        );

        scored = sort_results(scored);

        if let Some(max_results) = self.config.max_results {
            scored.truncate(max_results);
        }

        Ok(scored)
    }
}

impl Default for TermRanker {
    fn default() -> Self {
        Self::new(DEFAULT_TERM_RANKER_CONFIG)
    }
}

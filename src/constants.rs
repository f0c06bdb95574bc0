use crate::models::TermRankerConfig;

pub const DEFAULT_TERM_RANKER_CONFIG: TermRankerConfig = TermRankerConfig {
    min_score_threshold: 0.0,
    max_results: None,
};

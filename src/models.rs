pub mod error;
pub use error::Error;

pub mod term_ranker;
pub use term_ranker::{TermRanker, TermRankerConfig};

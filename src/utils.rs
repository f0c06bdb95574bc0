pub mod char_frequency_vectors;
pub mod cosine_similarity;
pub mod jaccard_similarity_chars;
pub mod read_term_list;
pub mod sort_results;

pub use char_frequency_vectors::char_frequency_vectors;
pub use cosine_similarity::{cosine_similarity, cosine_similarity_chars};
pub use jaccard_similarity_chars::jaccard_similarity_chars;
pub use read_term_list::{
    read_term_list_from_file, read_term_list_from_reader, read_term_list_from_string,
};
pub use sort_results::sort_results;

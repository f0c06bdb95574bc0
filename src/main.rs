use log::error;
use std::env;
use std::io::{self, Read};

use overlap_measures::{
    cosine_similarity_chars, jaccard_similarity_chars, rank_terms, read_term_list_from_string,
};

const USAGE: &str = "\
Usage:
  overlap-measures-cli <first-term> <second-term>   Print pairwise similarity scores
  overlap-measures-cli <query> < terms.csv          Rank terms from a CSV on stdin";

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    match args.as_slice() {
        [first_term, second_term] => {
            println!(
                "jaccard: {:.4}",
                jaccard_similarity_chars(first_term, second_term)
            );
            println!(
                "cosine: {:.4}",
                cosine_similarity_chars(first_term, second_term)
            );
        }
        [query] => {
            // Read the term list CSV from stdin
            let mut input = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut input) {
                error!("Failed to read from stdin: {}", e);
                std::process::exit(1);
            }

            let candidates = match read_term_list_from_string(&input) {
                Ok(candidates) => candidates,
                Err(e) => {
                    error!("Failed to parse term list: {}", e);
                    std::process::exit(1);
                }
            };

            // Rank the candidate terms against the query
            match rank_terms(query, &candidates) {
                Ok(results) => {
                    for (term, score) in results {
                        println!("{}: {:.2}", term, score);
                    }
                }
                Err(e) => {
                    error!("Error ranking terms: {}", e);
                    std::process::exit(1);
                }
            }
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    }
}

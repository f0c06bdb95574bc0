use overlap_measures::{jaccard_similarity_chars, rank_terms};

fn main() {
    env_logger::init();

    let query = "night";
    let candidates = vec!["nacht".to_string(), "night".to_string(), "tag".to_string()];

    let results = rank_terms(query, &candidates).unwrap();

    println!("Ranked candidates for the query \"{}\"", query);
    for (term, score) in results {
        println!("{}: {:.2}", term, score);
    }

    println!(
        "jaccard(\"night\", \"nacht\") = {:.4}",
        jaccard_similarity_chars("night", "nacht")
    );
}

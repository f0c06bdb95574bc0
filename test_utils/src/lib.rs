use csv::Reader;
use std::error::Error;

/// Utility to load candidate terms from a CSV file for testing and benchmarking.
///
/// The first column is treated as the term; blank rows are skipped.
pub fn load_terms_from_file(file_path: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let mut terms = Vec::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        match record.get(0) {
            Some(term) if !term.trim().is_empty() => terms.push(term.trim().to_string()),
            _ => eprintln!("Skipping invalid row: {:?}", record),
        }
    }

    Ok(terms)
}

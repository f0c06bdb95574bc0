use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use crate::models::Error;
use crate::types::TermList;

/// Read a term list from CSV data with a header row.
///
/// Only the `Term` column is used; any other columns are ignored. Rows with
/// a blank term are skipped.
pub fn read_term_list_from_reader<R: Read>(reader: R) -> Result<TermList, Error> {
    let mut terms = TermList::new();

    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    // Extract column headers
    let headers = csv_reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let term_position = headers
        .iter()
        .position(|h| h == "Term")
        .ok_or_else(|| Error::ParserError("Missing 'Term' column".to_string()))?;

    for record in csv_reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let term = record
            .get(term_position)
            .ok_or_else(|| Error::ParserError("Missing 'Term' field".to_string()))?
            .trim();

        if !term.is_empty() {
            terms.push(term.to_string());
        }
    }

    Ok(terms)
}

/// Read a term list from an in-memory CSV string.
pub fn read_term_list_from_string(csv: &str) -> Result<TermList, Error> {
    // Use a cursor to simulate a file reader from the string
    read_term_list_from_reader(Cursor::new(csv))
}

/// Read a term list from a CSV file, decompressing it first when the path
/// ends in `.gz`.
pub fn read_term_list_from_file(path: &Path) -> Result<TermList, Error> {
    let file = File::open(path)?;

    if path.extension().map_or(false, |ext| ext == "gz") {
        read_term_list_from_reader(GzDecoder::new(file))
    } else {
        read_term_list_from_reader(file)
    }
}

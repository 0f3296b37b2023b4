//! CSV ingestion for review files and CSV export of prediction results

mod csv;

pub use csv::{read_reviews_csv, write_predictions_csv, CsvError};

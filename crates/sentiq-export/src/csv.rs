//! Minimal quote-aware CSV handling
//!
//! Review files are simple enough (one text column, optional header) that a
//! full CSV dependency is not warranted; fields may be quoted, contain
//! commas and newlines, and escape quotes by doubling.

use sentiq_core::Prediction;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("no review rows found in {path}")]
    Empty { path: String },
}

/// Read review texts from a CSV file.
///
/// If a header row is present, the column named `text` (or `review`) is
/// used; otherwise the first column is taken and no row is skipped.
pub fn read_reviews_csv(path: &Path) -> Result<Vec<String>, CsvError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let rows = parse_csv(&contents);
    let mut rows = rows.into_iter();

    let (column, first_data_row) = match rows.next() {
        Some(header) => match text_column(&header) {
            Some(idx) => (idx, None),
            None => (0, Some(header)),
        },
        None => (0, None),
    };

    let reviews: Vec<String> = first_data_row
        .into_iter()
        .chain(rows)
        .filter_map(|row| row.into_iter().nth(column))
        .map(|field| field.trim().to_string())
        .filter(|field| !field.is_empty())
        .collect();

    if reviews.is_empty() {
        return Err(CsvError::Empty {
            path: path.display().to_string(),
        });
    }
    Ok(reviews)
}

/// Write `text,sentiment,confidence` rows; absent fields become empty cells
pub fn write_predictions_csv(path: &Path, predictions: &[Prediction]) -> Result<(), CsvError> {
    let mut out = String::from("text,sentiment,confidence\n");
    for p in predictions {
        let text = escape(p.text.as_deref().unwrap_or(""));
        let sentiment = p.sentiment.map(|s| s.as_str()).unwrap_or("");
        let confidence = p
            .confidence
            .map(|c| format!("{c:.4}"))
            .unwrap_or_default();
        out.push_str(&format!("{text},{sentiment},{confidence}\n"));
    }

    std::fs::write(path, out).map_err(|source| CsvError::Write {
        path: path.display().to_string(),
        source,
    })
}

fn text_column(header: &[String]) -> Option<usize> {
    header.iter().position(|h| {
        let h = h.trim().to_lowercase();
        h == "text" || h == "review"
    })
}

/// Quote a field when it contains a delimiter, quote, or newline
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn parse_csv(input: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' => {} // swallowed; \n terminates the row
            '\n' => {
                row.push(std::mem::take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(std::mem::take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(c),
        }
    }

    // Trailing row without a final newline
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiq_core::Sentiment;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_reads_text_column_by_header() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "reviews.csv", "id,text\n1,loved it\n2,hated it\n");

        let reviews = read_reviews_csv(&path).unwrap();
        assert_eq!(reviews, vec!["loved it", "hated it"]);
    }

    #[test]
    fn test_headerless_file_uses_first_column() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "reviews.csv", "loved it\nhated it\n");

        let reviews = read_reviews_csv(&path).unwrap();
        assert_eq!(reviews, vec!["loved it", "hated it"]);
    }

    #[test]
    fn test_quoted_fields_with_commas_and_newlines() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "reviews.csv",
            "text\n\"good, not great\"\n\"line one\nline two\"\n\"he said \"\"wow\"\"\"\n",
        );

        let reviews = read_reviews_csv(&path).unwrap();
        assert_eq!(reviews[0], "good, not great");
        assert_eq!(reviews[1], "line one\nline two");
        assert_eq!(reviews[2], "he said \"wow\"");
    }

    #[test]
    fn test_empty_file_is_a_format_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.csv", "");
        assert!(matches!(
            read_reviews_csv(&path),
            Err(CsvError::Empty { .. })
        ));

        let header_only = write_file(&dir, "header.csv", "text\n");
        assert!(read_reviews_csv(&header_only).is_err());
    }

    #[test]
    fn test_crlf_line_endings() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "reviews.csv", "text\r\nfine film\r\n");
        assert_eq!(read_reviews_csv(&path).unwrap(), vec!["fine film"]);
    }

    #[test]
    fn test_write_predictions_round_trips_through_parser() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let predictions = vec![
            Prediction::new("good, not great", Sentiment::Positive, 0.8123),
            Prediction::new("plain awful", Sentiment::Negative, 0.9),
        ];

        write_predictions_csv(&path, &predictions).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let rows = parse_csv(&contents);
        assert_eq!(rows[0], vec!["text", "sentiment", "confidence"]);
        assert_eq!(rows[1], vec!["good, not great", "positive", "0.8123"]);
        assert_eq!(rows[2][1], "negative");
    }

    #[test]
    fn test_write_handles_absent_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        write_predictions_csv(&path, &[Prediction::default()]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with(",,\n"));
    }
}

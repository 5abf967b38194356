//! Dataset loading
//!
//! Parses delimited game data into schema-conformant candidates. Set cells
//! hold multiple values separated by semicolons; ordinal cells hold
//! integers. Columns are mapped by header name, so extra columns in the
//! data are ignored and missing ones are an error.

use crate::core::{Candidate, ColumnRole, Value};
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for malformed datasets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    EmptyData,
    MissingColumn(String),
    RowTooShort { line: usize },
    BadOrdinal { line: usize, column: String, value: String },
    DuplicateIdentity { line: usize, identity: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyData => write!(f, "Dataset has no header row"),
            Self::MissingColumn(name) => {
                write!(f, "Dataset is missing the '{name}' column")
            }
            Self::RowTooShort { line } => {
                write!(f, "Row on line {line} has too few fields")
            }
            Self::BadOrdinal { line, column, value } => {
                write!(
                    f,
                    "Line {line}: '{value}' in column '{column}' is not an integer"
                )
            }
            Self::DuplicateIdentity { line, identity } => {
                write!(f, "Line {line}: duplicate identity '{identity}'")
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Parse CSV text into candidates, one per data row
///
/// `columns` is the game's ordered column list; candidate values follow the
/// order of its non-identity entries, matching the schema built from the
/// same list.
///
/// # Errors
/// Returns `LoadError` if the header is missing a declared column, a row is
/// shorter than the rightmost mapped column, an ordinal cell fails to parse
/// as an integer, or two rows share an identity.
pub fn parse_records(
    text: &str,
    columns: &[(&str, ColumnRole)],
) -> Result<Vec<Candidate>, LoadError> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header_line) = lines.next().ok_or(LoadError::EmptyData)?;
    let header = split_csv_line(header_line);

    // Map each declared column to its position in the data.
    let mut mapped: Vec<(usize, &str, ColumnRole)> = Vec::with_capacity(columns.len());
    for (name, role) in columns {
        let index = header
            .iter()
            .position(|h| h.trim() == *name)
            .ok_or_else(|| LoadError::MissingColumn((*name).to_string()))?;
        mapped.push((index, *name, *role));
    }

    let mut candidates = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    for (line_index, line) in lines {
        let line_number = line_index + 1;
        let fields = split_csv_line(line);

        let mut identity = String::new();
        let mut values = Vec::with_capacity(mapped.len() - 1);

        for &(index, name, role) in &mapped {
            let field = fields
                .get(index)
                .ok_or(LoadError::RowTooShort { line: line_number })?
                .trim();

            match role {
                ColumnRole::Identity => identity = field.to_string(),
                ColumnRole::Set => {
                    values.push(Value::set(
                        field
                            .split(';')
                            .map(str::trim)
                            .filter(|token| !token.is_empty()),
                    ));
                }
                ColumnRole::Ordinal => {
                    let parsed = field.parse::<i64>().map_err(|_| LoadError::BadOrdinal {
                        line: line_number,
                        column: name.to_string(),
                        value: field.to_string(),
                    })?;
                    values.push(Value::ordinal(parsed));
                }
            }
        }

        if !seen.insert(identity.to_lowercase()) {
            return Err(LoadError::DuplicateIdentity {
                line: line_number,
                identity,
            });
        }

        candidates.push(Candidate::new(identity, values));
    }

    Ok(candidates)
}

/// Split one CSV line, honoring double-quoted fields
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                // Doubled quote inside a quoted field is a literal quote.
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(field);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[(&str, ColumnRole)] = &[
        ("Champion", ColumnRole::Identity),
        ("Position(s)", ColumnRole::Set),
        ("Release year", ColumnRole::Ordinal),
    ];

    #[test]
    fn parses_simple_rows() {
        let text = "Champion,Position(s),Release year\n\
                    Ahri,Middle,2011\n\
                    Lux,Middle;Support,2010\n";
        let candidates = parse_records(text, COLUMNS).unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].identity(), "Ahri");
        assert_eq!(candidates[0].value(1), &Value::ordinal(2011));
        assert_eq!(
            candidates[1].value(0),
            &Value::set(["Middle", "Support"])
        );
    }

    #[test]
    fn columns_mapped_by_header_name() {
        // Data column order differs from the declared order; extras ignored.
        let text = "Release year,Icon,Champion,Position(s)\n\
                    2013,img/jinx.png,Jinx,Bottom\n";
        let candidates = parse_records(text, COLUMNS).unwrap();

        assert_eq!(candidates[0].identity(), "Jinx");
        assert_eq!(candidates[0].value(0), &Value::set(["Bottom"]));
        assert_eq!(candidates[0].value(1), &Value::ordinal(2013));
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let text = "Champion,Position(s),Release year\n\
                    \"Kai'Sa, Daughter of the Void\",Bottom,2018\n";
        let candidates = parse_records(text, COLUMNS).unwrap();

        assert_eq!(candidates[0].identity(), "Kai'Sa, Daughter of the Void");
    }

    #[test]
    fn blank_lines_skipped() {
        let text = "Champion,Position(s),Release year\n\n\
                    Ahri,Middle,2011\n\n";
        let candidates = parse_records(text, COLUMNS).unwrap();
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn set_tokens_trimmed() {
        let text = "Champion,Position(s),Release year\n\
                    Lux,Middle ; Support,2010\n";
        let candidates = parse_records(text, COLUMNS).unwrap();
        assert_eq!(
            candidates[0].value(0),
            &Value::set(["Middle", "Support"])
        );
    }

    #[test]
    fn missing_column_is_an_error() {
        let text = "Champion,Release year\nAhri,2011\n";
        assert_eq!(
            parse_records(text, COLUMNS),
            Err(LoadError::MissingColumn("Position(s)".to_string()))
        );
    }

    #[test]
    fn bad_ordinal_is_an_error() {
        let text = "Champion,Position(s),Release year\n\
                    Ahri,Middle,soon\n";
        assert_eq!(
            parse_records(text, COLUMNS),
            Err(LoadError::BadOrdinal {
                line: 2,
                column: "Release year".to_string(),
                value: "soon".to_string(),
            })
        );
    }

    #[test]
    fn short_row_is_an_error() {
        let text = "Champion,Position(s),Release year\n\
                    Ahri,Middle\n";
        assert_eq!(
            parse_records(text, COLUMNS),
            Err(LoadError::RowTooShort { line: 2 })
        );
    }

    #[test]
    fn duplicate_identity_is_an_error() {
        let text = "Champion,Position(s),Release year\n\
                    Ahri,Middle,2011\n\
                    ahri,Middle,2011\n";
        assert!(matches!(
            parse_records(text, COLUMNS),
            Err(LoadError::DuplicateIdentity { line: 3, .. })
        ));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(parse_records("", COLUMNS), Err(LoadError::EmptyData));
        assert_eq!(parse_records("\n\n", COLUMNS), Err(LoadError::EmptyData));
    }

    #[test]
    fn split_csv_line_quoting() {
        assert_eq!(split_csv_line("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_csv_line("\"a,b\",c"), vec!["a,b", "c"]);
        assert_eq!(split_csv_line("\"say \"\"hi\"\"\",c"), vec!["say \"hi\"", "c"]);
        assert_eq!(split_csv_line("a,,c"), vec!["a", "", "c"]);
    }
}

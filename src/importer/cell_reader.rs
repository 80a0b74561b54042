// ==========================================
// BIIS Import - Cell Value Extractor
// ==========================================
// Lowest layer: one calamine cell in, one typed value out.
// The declared cell kind decides the outcome; no heuristic
// parsing of text. Numeric cells formatted as dates surface
// as dates, never as numbers.
// ==========================================

use calamine::{Data, DataType};
use chrono::NaiveDate;

// ==========================================
// CellValue - typed extraction result
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Bool(bool),
    /// Formula source text, never the cached result.
    Formula(String),
}

/// Extracts a typed value from a cell.
///
/// `formula` is the cell's entry in the sheet's formula range,
/// if any; it takes precedence over the cached value. Blank and
/// error cells yield `None`.
pub fn extract(cell: &Data, formula: Option<&str>) -> Option<CellValue> {
    if let Some(source) = formula {
        if !source.is_empty() {
            return Some(CellValue::Formula(source.to_string()));
        }
    }

    match cell {
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(_) | Data::DateTimeIso(_) => {
            cell.as_datetime().map(|dt| CellValue::Date(dt.date()))
        }
        Data::DurationIso(_) | Data::Error(_) | Data::Empty => None,
    }
}

impl CellValue {
    /// String rendition of the value, used wherever a column is
    /// consumed as text. Whole-number floats render without a
    /// trailing `.0`; blank-ish text collapses to `None`.
    pub fn as_text(&self) -> Option<String> {
        let text = match self {
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(f) => {
                if *f == f.floor() && f.abs() < 1e15 {
                    format!("{}", *f as i64)
                } else {
                    f.to_string()
                }
            }
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Bool(b) => {
                if *b {
                    "TRUE".to_string()
                } else {
                    "FALSE".to_string()
                }
            }
            CellValue::Formula(src) => src.trim().to_string(),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Raw display used in log messages for failed cells.
    pub fn display_raw(&self) -> String {
        self.as_text().unwrap_or_default()
    }
}

// ==========================================
// A1-style cell references (log/error context)
// ==========================================

/// Column letters from a zero-based column index ("A", "AB", ...).
pub fn col_letter(col_idx: usize) -> String {
    let mut n = col_idx + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// A1 reference from zero-based row/column indices.
pub fn cell_ref(row_idx: usize, col_idx: usize) -> String {
    format!("{}{}", col_letter(col_idx), row_idx + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_string() {
        assert_eq!(
            extract(&Data::String("Buero".to_string()), None),
            Some(CellValue::Text("Buero".to_string()))
        );
    }

    #[test]
    fn test_extract_numeric_kinds() {
        assert_eq!(
            extract(&Data::Float(12.5), None),
            Some(CellValue::Number(12.5))
        );
        assert_eq!(
            extract(&Data::Int(12), None),
            Some(CellValue::Number(12.0))
        );
    }

    #[test]
    fn test_extract_date_formatted_cell() {
        let value = extract(&Data::DateTimeIso("2014-03-01T00:00:00".to_string()), None);
        assert_eq!(
            value,
            Some(CellValue::Date(NaiveDate::from_ymd_opt(2014, 3, 1).unwrap()))
        );
    }

    #[test]
    fn test_extract_bool() {
        assert_eq!(extract(&Data::Bool(true), None), Some(CellValue::Bool(true)));
    }

    #[test]
    fn test_formula_source_wins_over_cached_value() {
        let value = extract(&Data::Float(42.0), Some("A1*2"));
        assert_eq!(value, Some(CellValue::Formula("A1*2".to_string())));
    }

    #[test]
    fn test_blank_and_error_yield_none() {
        assert_eq!(extract(&Data::Empty, None), None);
        assert_eq!(extract(&Data::Empty, Some("")), None);
        assert_eq!(
            extract(&Data::Error(calamine::CellErrorType::Div0), None),
            None
        );
    }

    #[test]
    fn test_as_text_renders_whole_floats_without_fraction() {
        assert_eq!(
            CellValue::Number(4711.0).as_text().as_deref(),
            Some("4711")
        );
        assert_eq!(
            CellValue::Number(47.25).as_text().as_deref(),
            Some("47.25")
        );
    }

    #[test]
    fn test_as_text_blank_collapses_to_none() {
        assert_eq!(CellValue::Text("   ".to_string()).as_text(), None);
    }

    #[test]
    fn test_col_letter() {
        assert_eq!(col_letter(0), "A");
        assert_eq!(col_letter(25), "Z");
        assert_eq!(col_letter(26), "AA");
        assert_eq!(cell_ref(0, 1), "B1");
    }
}

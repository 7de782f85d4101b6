//! Delimited-table rendering of projection histories
//!
//! Renders a [`ProjectionHistory`] as a delimited text table compatible
//! with Excel, pandas and friends:
//!
//! ```csv
//! Period,Class_1,Class_2,Class_3
//! 0,100.000000,100.000000,100.000000
//! 1,700.000000,50.000000,25.000000
//! ```
//!
//! Rows are time periods, columns are age classes, the header row names
//! each class and the index column names the period. Rendering is
//! purely in-memory; [`TableConfig::write_to`] accepts any `io::Write`
//! so callers decide where the bytes go.

use std::io;

use crate::projection::ProjectionHistory;

/// Formatting options for the projection table.
///
/// # Example
///
/// ```rust
/// use leslie_rs::output::export::TableConfig;
///
/// let config = TableConfig {
///     delimiter: ';',
///     precision: 2,
///     ..Default::default()
/// };
/// assert_eq!(config.delimiter, ';');
/// ```
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Column separator.
    pub delimiter: char,
    /// Decimal places for population values.
    pub precision: usize,
    /// Prefix for the class column headers (`Class_1`, `Class_2`, …).
    pub class_prefix: String,
    /// Header of the period index column.
    pub period_header: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            class_prefix: "Class_".to_string(),
            period_header: "Period".to_string(),
        }
    }
}

impl TableConfig {
    /// Render the history as one delimited string, header row included.
    pub fn render(&self, history: &ProjectionHistory) -> String {
        let n = history.n_classes();
        let mut out = String::new();

        out.push_str(&self.period_header);
        for class in 1..=n {
            out.push(self.delimiter);
            out.push_str(&format!("{}{}", self.class_prefix, class));
        }
        out.push('\n');

        for (period, population) in history.iter().enumerate() {
            out.push_str(&period.to_string());
            for value in population.iter() {
                out.push(self.delimiter);
                out.push_str(&format!("{:.*}", self.precision, value));
            }
            out.push('\n');
        }

        out
    }

    /// Render into any writer.
    ///
    /// # Errors
    ///
    /// Propagates whatever the writer reports.
    pub fn write_to<W: io::Write>(
        &self,
        history: &ProjectionHistory,
        writer: &mut W,
    ) -> io::Result<()> {
        writer.write_all(self.render(history).as_bytes())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demography::LeslieMatrix;
    use crate::projection::Projector;
    use nalgebra::DVector;

    fn example_history(steps: usize) -> ProjectionHistory {
        let matrix = LeslieMatrix::from_slices(&[0.0, 4.0, 3.0], &[0.5, 0.25]).unwrap();
        let initial = DVector::from_vec(vec![100.0, 100.0, 100.0]);
        Projector::new().project(&matrix, &initial, steps).unwrap()
    }

    #[test]
    fn test_header_names_every_class() {
        let table = TableConfig::default().render(&example_history(0));
        let header = table.lines().next().unwrap();
        assert_eq!(header, "Period,Class_1,Class_2,Class_3");
    }

    #[test]
    fn test_one_row_per_period_plus_header() {
        let table = TableConfig::default().render(&example_history(5));
        assert_eq!(table.lines().count(), 7);
    }

    #[test]
    fn test_rows_carry_period_index_and_values() {
        let table = TableConfig {
            precision: 1,
            ..Default::default()
        }
        .render(&example_history(1));

        let rows: Vec<&str> = table.lines().collect();
        assert_eq!(rows[1], "0,100.0,100.0,100.0");
        assert_eq!(rows[2], "1,700.0,50.0,25.0");
    }

    #[test]
    fn test_custom_delimiter_and_headers() {
        let config = TableConfig {
            delimiter: ';',
            precision: 0,
            class_prefix: "Age".to_string(),
            period_header: "T".to_string(),
        };
        let table = config.render(&example_history(0));

        assert_eq!(table, "T;Age1;Age2;Age3\n0;100;100;100\n");
    }

    #[test]
    fn test_write_to_matches_render() {
        let config = TableConfig::default();
        let history = example_history(2);

        let mut buffer = Vec::new();
        config.write_to(&history, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), config.render(&history));
    }
}

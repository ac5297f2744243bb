use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a sample table
// ---------------------------------------------------------------------------

/// A typed scalar cell, mirroring the dtypes the sample tables use.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    /// ISO-8601 date kept as text (`YYYY-MM-DD`).
    Date(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.1}"),
            CellValue::Date(d) => write!(f, "{d}"),
        }
    }
}

impl CellValue {
    /// Interpret the value as an `f64` for range filtering.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            CellValue::String(_) => ColumnKind::String,
            CellValue::Integer(_) => ColumnKind::Integer,
            CellValue::Float(_) => ColumnKind::Float,
            CellValue::Date(_) => ColumnKind::Date,
        }
    }
}

// ---------------------------------------------------------------------------
// Columns and rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    String,
    Integer,
    Float,
    Date,
}

impl ColumnKind {
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Float)
    }
}

/// A named, homogeneously typed column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(name: &str, kind: ColumnKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

/// One row: cells in the declared column order.
pub type Row = Vec<CellValue>;

// ---------------------------------------------------------------------------
// Dataset – an ordered, immutable table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Ordered column declarations.
    pub columns: Vec<Column>,
    /// Rows in insertion order.
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset from column declarations and rows.
    ///
    /// Every row must have one cell per column, and each cell must match the
    /// declared column kind; violations are programming errors in the static
    /// tables and are caught by `debug_assert!`.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        for row in &rows {
            debug_assert_eq!(row.len(), columns.len(), "row width mismatch");
            for (cell, col) in row.iter().zip(&columns) {
                debug_assert_eq!(cell.kind(), col.kind, "column '{}' type mismatch", col.name);
            }
        }
        Self { columns, rows }
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Copy of this dataset restricted to the given row indices, in index order.
    pub fn select_rows(&self, indices: &[usize]) -> Dataset {
        Dataset {
            columns: self.columns.clone(),
            rows: indices
                .iter()
                .filter_map(|&i| self.rows.get(i).cloned())
                .collect(),
        }
    }

    /// The cell at (`row`, `column`) if both exist.
    #[cfg(test)]
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Dataset {
        Dataset::new(
            vec![
                Column::new("Name", ColumnKind::String),
                Column::new("Value", ColumnKind::Integer),
            ],
            vec![
                vec![CellValue::String("a".into()), CellValue::Integer(1)],
                vec![CellValue::String("b".into()), CellValue::Integer(2)],
                vec![CellValue::String("c".into()), CellValue::Integer(3)],
            ],
        )
    }

    #[test]
    fn select_rows_keeps_columns_and_order() {
        let ds = tiny();
        let picked = ds.select_rows(&[0, 2]);
        assert_eq!(picked.columns, ds.columns);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked.cell(1, "Name"), Some(&CellValue::String("c".into())));
    }

    #[test]
    fn select_rows_skips_out_of_range() {
        assert_eq!(tiny().select_rows(&[7]).len(), 0);
    }

    #[test]
    fn numeric_view_of_cells() {
        assert_eq!(CellValue::Integer(-3).as_f64(), Some(-3.0));
        assert_eq!(CellValue::Float(4.2).as_f64(), Some(4.2));
        assert_eq!(CellValue::Date("2024-01-01".into()).as_f64(), None);
        assert!(ColumnKind::Float.is_numeric());
        assert!(!ColumnKind::Date.is_numeric());
    }

    #[test]
    fn display_formats() {
        assert_eq!(CellValue::Float(-12.7).to_string(), "-12.7");
        assert_eq!(CellValue::Integer(65).to_string(), "65");
    }
}

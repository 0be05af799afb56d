//! The append-only observation table

use crate::batch::Batch;
use crate::error::DataError;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Accumulated record of evaluated points and results.
///
/// The table is a growable arena of rows over an ordered column union. Row
/// identity is derived purely from position and is therefore always the
/// integer sequence `0..row_count()`, no matter what labels arrived with the
/// appended batches. Identities are positional, not durable: an append
/// renumbers the whole sequence, so callers must not hold on to them across
/// appends.
///
/// The table never shrinks; [`ObservationTable::append`] is the only
/// mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl ObservationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch of rows, extending the column union as needed.
    ///
    /// Cells absent from the batch (or from pre-existing rows when the batch
    /// introduces a new column) are filled with [`Value::Missing`]. The
    /// append is all-or-nothing: every batch label is coerced before any
    /// mutation, so a failure leaves the table exactly as it was.
    ///
    /// Returns the new row count.
    pub fn append(&mut self, batch: Batch) -> Result<usize, DataError> {
        if let Some(labels) = batch.labels() {
            if labels.len() != batch.len() {
                return Err(DataError::LabelCountMismatch {
                    labels: labels.len(),
                    rows: batch.len(),
                });
            }
            for label in labels {
                label.coerce()?;
            }
        }

        let (batch_columns, batch_rows, _labels) = batch.into_parts();

        for column in &batch_columns {
            if !self.columns.contains(column) {
                self.columns.push(column.clone());
                for row in &mut self.rows {
                    row.push(Value::Missing);
                }
            }
        }

        let indices: Vec<usize> = batch_columns
            .iter()
            .map(|column| {
                self.columns
                    .iter()
                    .position(|existing| existing == column)
                    .expect("batch column present after union")
            })
            .collect();

        for batch_row in batch_rows {
            let mut row = vec![Value::Missing; self.columns.len()];
            for (slot, value) in indices.iter().zip(batch_row) {
                row[*slot] = value;
            }
            self.rows.push(row);
        }

        Ok(self.rows.len())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// (rows, columns) shape of the table.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Canonical row identities: exactly `0..row_count()`.
    pub fn identities(&self) -> Range<usize> {
        0..self.rows.len()
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let slot = self.columns.iter().position(|existing| existing == column)?;
        self.rows.get(row).map(|values| &values[slot])
    }

    /// All values of one column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let slot = self.columns.iter().position(|existing| existing == name)?;
        Some(self.rows.iter().map(|row| &row[slot]).collect())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[(&str, f64)]) -> Vec<(String, Value)> {
        values
            .iter()
            .map(|(name, value)| (name.to_string(), Value::from(*value)))
            .collect()
    }

    #[test]
    fn labeled_then_unlabeled_appends_renumber() {
        let mut table = ObservationTable::new();

        let first = Batch::from_rows([row(&[("x1", 1.0), ("x2", 2.0), ("y1", 3.0)])])
            .with_labels([0_i64])
            .unwrap();
        table.append(first).unwrap();
        assert_eq!(table.shape(), (1, 3));
        assert_eq!(table.identities(), 0..1);

        let bulk = Batch::from_rows(
            (0..100).map(|i| row(&[("x1", i as f64), ("x2", 0.5), ("y1", 0.25)])),
        );
        table.append(bulk).unwrap();
        assert_eq!(table.shape(), (101, 3));
        assert_eq!(table.identities(), 0..101);
    }

    #[test]
    fn textual_and_mixed_labels_coerce() {
        let mut table = ObservationTable::new();

        let first = Batch::from_rows([row(&[("x1", 1.0), ("x2", 2.0), ("y1", 3.0)])])
            .with_labels(["0"])
            .unwrap();
        table.append(first).unwrap();

        let second = Batch::from_rows([
            row(&[("x1", 4.0), ("x2", 6.0), ("y1", 8.0)]),
            row(&[("x1", 5.0), ("x2", 7.0), ("y1", 9.0)]),
        ])
        .with_labels([crate::RowLabel::from("1"), crate::RowLabel::from(2_i64)])
        .unwrap();
        table.append(second).unwrap();

        let third = Batch::from_rows([row(&[("x1", 10.0), ("x2", 11.0), ("y1", 12.0)])])
            .with_labels([3_i64])
            .unwrap();
        table.append(third).unwrap();

        assert_eq!(table.identities().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn renumbering_ignores_label_values() {
        let mut labeled = ObservationTable::new();
        let mut unlabeled = ObservationTable::new();

        let rows = [
            row(&[("x1", 1.0), ("y1", 2.0)]),
            row(&[("x1", 3.0), ("y1", 4.0)]),
        ];

        labeled
            .append(
                Batch::from_rows(rows.clone())
                    .with_labels([990_i64, 17_i64])
                    .unwrap(),
            )
            .unwrap();
        unlabeled.append(Batch::from_rows(rows)).unwrap();

        assert_eq!(labeled, unlabeled);
    }

    #[test]
    fn non_numeric_label_leaves_table_untouched() {
        let mut table = ObservationTable::new();
        table
            .append(Batch::from_rows([row(&[("x1", 1.0)])]))
            .unwrap();
        let before = table.clone();

        let bad = Batch::from_rows([row(&[("x1", 2.0)])])
            .with_labels(["not-a-number"])
            .unwrap();
        let err = table.append(bad).unwrap_err();
        assert_eq!(
            err,
            DataError::NonNumericLabel {
                label: "not-a-number".into()
            }
        );
        assert_eq!(table, before);
    }

    #[test]
    fn column_union_backfills_missing() {
        let mut table = ObservationTable::new();
        table
            .append(Batch::from_rows([row(&[("x1", 1.0), ("y1", 2.0)])]))
            .unwrap();
        table
            .append(Batch::from_rows([row(&[("x1", 3.0), ("c1", 0.9)])]))
            .unwrap();

        assert_eq!(table.columns(), ["x1", "y1", "c1"]);
        assert_eq!(table.get(0, "c1"), Some(&Value::Missing));
        assert_eq!(table.get(1, "y1"), Some(&Value::Missing));
        assert_eq!(table.get(1, "c1"), Some(&Value::Float(0.9)));

        let column = table.column("x1").unwrap();
        assert_eq!(column, vec![&Value::Float(1.0), &Value::Float(3.0)]);
    }
}

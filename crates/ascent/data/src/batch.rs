//! Rectangular ingest unit for the observation table

use crate::error::DataError;
use crate::value::{RowLabel, Value};
use std::collections::BTreeMap;

/// A rectangular block of rows headed for an observation table.
///
/// Columns are ordered and unique; every row carries exactly one value per
/// column. Row labels are optional and, when present, must match the row
/// count at append time.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    labels: Option<Vec<RowLabel>>,
}

impl Batch {
    /// Create an empty batch with the given column header.
    pub fn new<I, S>(columns: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut header: Vec<String> = Vec::new();
        for column in columns {
            let column = column.into();
            if header.contains(&column) {
                return Err(DataError::DuplicateColumn { name: column });
            }
            header.push(column);
        }
        Ok(Self {
            columns: header,
            rows: Vec::new(),
            labels: None,
        })
    }

    /// Build a batch from mapping-shaped rows, taking the column union and
    /// filling absent cells with [`Value::Missing`].
    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        let mapped: Vec<BTreeMap<String, Value>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(|(name, value)| (name.into(), value)).collect())
            .collect();

        let mut columns: Vec<String> = Vec::new();
        for row in &mapped {
            for name in row.keys() {
                if !columns.contains(name) {
                    columns.push(name.clone());
                }
            }
        }

        let rows = mapped
            .into_iter()
            .map(|mut row| {
                columns
                    .iter()
                    .map(|name| row.remove(name).unwrap_or(Value::Missing))
                    .collect()
            })
            .collect();

        Self {
            columns,
            rows,
            labels: None,
        }
    }

    /// Append a row. Fails if the value count does not match the header.
    pub fn push_row(&mut self, values: Vec<Value>) -> Result<&mut Self, DataError> {
        if values.len() != self.columns.len() {
            return Err(DataError::RaggedRow {
                expected: self.columns.len(),
                found: values.len(),
            });
        }
        self.rows.push(values);
        Ok(self)
    }

    /// Attach row labels. Fails if the count does not match the current rows.
    pub fn with_labels<I, L>(mut self, labels: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = L>,
        L: Into<RowLabel>,
    {
        let labels: Vec<RowLabel> = labels.into_iter().map(Into::into).collect();
        if labels.len() != self.rows.len() {
            return Err(DataError::LabelCountMismatch {
                labels: labels.len(),
                rows: self.rows.len(),
            });
        }
        self.labels = Some(labels);
        Ok(self)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn labels(&self) -> Option<&[RowLabel]> {
        self.labels.as_deref()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<Vec<Value>>, Option<Vec<RowLabel>>) {
        (self.columns, self.rows, self.labels)
    }
}

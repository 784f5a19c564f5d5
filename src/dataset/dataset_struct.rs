//! Defines `Dataset`, a column-major table.
use std::collections::HashMap;

use polars::prelude::*;

use crate::error::{Id3Error, Result};
use super::column::Column;
use super::value::Value;


/// Struct `Dataset` holds a table in column-major form.
/// Every column has the same length and a unique name.
///
/// All transformations return a new `Dataset`,
/// so a table handed to one branch of the tree
/// is never changed by another.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) columns:       Vec<Column>,
    pub(super) n_rows:        usize,
}


impl Dataset {
    /// Construct a new `Dataset` from its columns.
    /// Returns `Err` if the columns disagree on length
    /// or two columns share a name.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let n_rows = columns.first().map_or(0, Column::len);

        let mut name_to_index = HashMap::with_capacity(columns.len());
        for (i, column) in columns.iter().enumerate() {
            if column.len() != n_rows {
                return Err(Id3Error::RowCountMismatch {
                    column:   column.name().to_string(),
                    expected: n_rows,
                    got:      column.len(),
                });
            }
            let name = column.name().to_string();
            if name_to_index.insert(name, i).is_some() {
                return Err(Id3Error::DuplicateColumn(column.name().to_string()));
            }
        }

        Ok(Self { name_to_index, columns, n_rows, })
    }


    /// Convert a `polars::DataFrame` into `Dataset`.
    /// Integer columns become [`Value::Int`],
    /// floating point columns [`Value::Float`],
    /// and every other type is read as text.
    /// A null cell is rejected.
    pub fn from_dataframe(data: &DataFrame) -> Result<Self> {
        let columns = data.get_columns()
            .iter()
            .map(column_from_series)
            .collect::<Result<Vec<_>>>()?;
        Self::new(columns)
    }


    /// Returns the pair `(# of rows, # of columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }


    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }


    /// Returns the columns in table order.
    pub fn columns(&self) -> &[Column] {
        &self.columns[..]
    }


    /// Returns the column names in table order.
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter()
            .map(Column::name)
            .collect()
    }


    /// Returns `true` if a column is named `name`.
    pub fn has_column(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }


    /// Returns the column named `name`.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.name_to_index.get(name)
            .map(|&i| &self.columns[i])
            .ok_or_else(|| Id3Error::MissingColumn(name.to_string()))
    }


    /// Returns the cells of row `row` in column order.
    pub fn row(&self, row: usize) -> Vec<&Value> {
        self.columns.iter()
            .map(|column| &column.values()[row])
            .collect()
    }


    /// Removes the column named `name`.
    /// Returns `Err` if there is no such column.
    pub fn drop(self, name: &str) -> Result<Self> {
        if !self.has_column(name) {
            return Err(Id3Error::MissingColumn(name.to_string()));
        }
        Ok(self.without(name))
    }


    /// Removes the column named `name` if it exists.
    pub fn without(mut self, name: &str) -> Self {
        if let Some(&pos) = self.name_to_index.get(name) {
            self.columns.remove(pos);
            self.reindex();
        }
        self
    }


    /// Appends `column`, or replaces the column with the same name.
    pub fn with_column(mut self, column: Column) -> Result<Self> {
        if !self.columns.is_empty() && column.len() != self.n_rows {
            return Err(Id3Error::RowCountMismatch {
                column:   column.name().to_string(),
                expected: self.n_rows,
                got:      column.len(),
            });
        }

        match self.name_to_index.get(column.name()) {
            Some(&i) => { self.columns[i] = column; },
            None => {
                self.name_to_index.insert(column.name().to_string(), self.columns.len());
                self.n_rows = column.len();
                self.columns.push(column);
            },
        }
        Ok(self)
    }


    /// Replaces a numeric column by its categories.
    /// See [`Column::categorize`].
    pub fn categorize(self, name: &str, bounds: &[f64]) -> Result<Self> {
        let column = self.column(name)?.categorize(bounds)?;
        self.with_column(column)
    }


    /// Returns the rows whose cell in column `name` equals `value`.
    pub fn filter_eq(&self, name: &str, value: &Value) -> Result<Self> {
        let rows = self.column(name)?
            .values()
            .iter()
            .enumerate()
            .filter_map(|(i, v)| (v == value).then_some(i))
            .collect::<Vec<_>>();
        Ok(self.take(&rows[..]))
    }


    /// Returns the rows at the given indices, in that order.
    pub fn take(&self, rows: &[usize]) -> Self {
        let columns = self.columns.iter()
            .map(|column| column.take(rows))
            .collect();
        Self {
            name_to_index: self.name_to_index.clone(),
            columns,
            n_rows: rows.len(),
        }
    }


    fn reindex(&mut self) {
        self.name_to_index = self.columns.iter()
            .enumerate()
            .map(|(i, c)| (c.name().to_string(), i))
            .collect();
        if self.columns.is_empty() {
            self.n_rows = 0;
        }
    }
}


fn column_from_series(series: &Series) -> Result<Column> {
    let name = series.name();
    let missing = |row| Id3Error::MissingValue { column: name.to_string(), row };

    let values = match series.dtype() {
        DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64
        | DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64 => {
            let series = series.cast(&DataType::Int64)?;
            series.i64()?
                .into_iter()
                .enumerate()
                .map(|(i, v)| v.map(Value::from).ok_or_else(|| missing(i)))
                .collect::<Result<Vec<_>>>()?
        },
        DataType::Float32 | DataType::Float64 => {
            let series = series.cast(&DataType::Float64)?;
            series.f64()?
                .into_iter()
                .enumerate()
                .map(|(i, v)| v.map(Value::from).ok_or_else(|| missing(i)))
                .collect::<Result<Vec<_>>>()?
        },
        _ => {
            let series = series.cast(&DataType::Utf8)?;
            series.utf8()?
                .into_iter()
                .enumerate()
                .map(|(i, v)| v.map(Value::from).ok_or_else(|| missing(i)))
                .collect::<Result<Vec<_>>>()?
        },
    };

    Ok(Column::new(name, values))
}

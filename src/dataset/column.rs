//! A named column of typed cells.
use std::collections::HashMap;

use crate::error::{Id3Error, Result};
use crate::id3::impurity;
use super::value::{Value, format_float};


/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name:   String,
    values: Vec<Value>,
}


impl Column {
    /// Construct a new column from its cells.
    pub fn new<T: ToString>(name: T, values: Vec<Value>) -> Self {
        Self { name: name.to_string(), values, }
    }


    /// Construct a new column from anything convertible to [`Value`].
    /// ```
    /// use id3tree::Column;
    /// let weather = Column::from_values("Weather", ["Sunny", "Rainy"]);
    /// assert_eq!(weather.len(), 2);
    /// ```
    pub fn from_values<T, V, I>(name: T, values: I) -> Self
        where T: ToString,
              V: Into<Value>,
              I: IntoIterator<Item = V>,
    {
        let values = values.into_iter()
            .map(Into::into)
            .collect::<Vec<_>>();
        Self::new(name, values)
    }


    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the cells in row order.
    pub fn values(&self) -> &[Value] {
        &self.values[..]
    }


    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    /// Returns the distinct values in first-seen order.
    pub fn distinct(&self) -> Vec<Value> {
        self.value_counts()
            .into_iter()
            .map(|(value, _)| value)
            .collect()
    }


    /// Returns `(value, count)` pairs in first-seen order.
    pub fn value_counts(&self) -> Vec<(Value, usize)> {
        let mut index = HashMap::<&Value, usize>::new();
        let mut counts = Vec::<(Value, usize)>::new();
        for value in self.values.iter() {
            match index.get(value) {
                Some(&i) => { counts[i].1 += 1; },
                None => {
                    index.insert(value, counts.len());
                    counts.push((value.clone(), 1));
                },
            }
        }
        counts
    }


    /// Returns the relative frequency of each distinct value,
    /// in the order of [`Column::value_counts`].
    /// An empty column has an empty distribution.
    pub fn distribution(&self) -> Vec<f64> {
        impurity::distribution(self.values.iter())
    }


    /// Returns the median of a numeric column.
    /// For an even number of cells, this is the mean of the two middle ones.
    pub fn median(&self) -> Result<f64> {
        let mut xs = self.numeric_values()?;
        if xs.is_empty() {
            return Err(Id3Error::EmptyDataset);
        }
        xs.sort_by(f64::total_cmp);

        let mid = xs.len() / 2;
        let median = if xs.len() % 2 == 0 {
            (xs[mid - 1] + xs[mid]) / 2f64
        } else {
            xs[mid]
        };
        Ok(median)
    }


    /// Returns the indicator column `name<threshold`,
    /// holding `0` where the cell is below `threshold` and `1` elsewhere.
    pub fn binarize(&self, threshold: f64) -> Result<Self> {
        let values = self.numeric_values()?
            .into_iter()
            .map(|x| Value::Int(if x < threshold { 0 } else { 1 }))
            .collect::<Vec<_>>();
        let name = format!("{}<{}", self.name, format_float(threshold));
        Ok(Self::new(name, values))
    }


    /// Maps a numeric column onto the categories `1, 2, ..., bounds.len() + 1`.
    /// A cell falls in category `k` when it exceeds exactly `k - 1` bounds,
    /// so `bounds = [20, 40]` gives `x <= 20 -> 1`, `x <= 40 -> 2`, else `3`.
    pub fn categorize(&self, bounds: &[f64]) -> Result<Self> {
        let values = self.numeric_values()?
            .into_iter()
            .map(|x| {
                let above = bounds.iter().filter(|&&b| x > b).count();
                Value::Int(above as i64 + 1)
            })
            .collect::<Vec<_>>();
        Ok(Self::new(&self.name, values))
    }


    /// Returns the cells at `rows`, in that order.
    pub(crate) fn take(&self, rows: &[usize]) -> Self {
        let values = rows.iter()
            .map(|&i| self.values[i].clone())
            .collect();
        Self::new(&self.name, values)
    }


    fn numeric_values(&self) -> Result<Vec<f64>> {
        self.values.iter()
            .map(|v| v.as_f64())
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| Id3Error::NonNumeric(self.name.clone()))
    }
}

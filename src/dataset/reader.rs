//! Reads a CSV file into a [`Dataset`].
use std::path::Path;

use polars::prelude::*;

use crate::error::{Id3Error, Result};
use super::dataset_struct::Dataset;


/// A struct that returns [`Dataset`].
/// Using this struct, one can read a CSV file to [`Dataset`]
/// and discard the columns that carry no information for a split
/// (identifiers, free text).
/// # Example
/// ```no_run
/// use id3tree::DatasetReader;
/// let dataset = DatasetReader::default()
///     .file("titanic-homework.csv")
///     .has_header(true)
///     .drop_column("PassengerId")
///     .drop_column("Name")
///     .read()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DatasetReader<P> {
    file:       Option<P>,
    has_header: bool,
    drop:       Vec<String>,
}


impl<P> Default for DatasetReader<P> {
    fn default() -> Self {
        Self {
            file:       None,
            has_header: true,
            drop:       Vec::new(),
        }
    }
}


impl<P> DatasetReader<P> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `true.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Discard the column named `column` after reading.
    /// Reading fails if the column does not exist.
    pub fn drop_column<S: AsRef<str>>(mut self, column: S) -> Self {
        self.drop.push(column.as_ref().to_string());
        self
    }
}


impl<P> DatasetReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file and returns the dataset without the dropped columns.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Dataset> {
        let file = self.file
            .ok_or_else(|| {
                Id3Error::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "the file name for the dataset is not set",
                ))
            })?;
        let file = file.as_ref();

        let frame = CsvReader::from_path(file)?
            .has_header(self.has_header)
            .finish()?;
        tracing::info!(
            "read {} rows x {} columns from {}",
            frame.height(), frame.width(), file.display(),
        );

        let mut dataset = Dataset::from_dataframe(&frame)?;
        for column in self.drop.iter() {
            dataset = dataset.drop(column)?;
        }
        Ok(dataset)
    }
}

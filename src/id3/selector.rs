//! Chooses the attribute with maximal information gain.
use rayon::prelude::*;

use crate::error::{Id3Error, Result};
use crate::dataset::{Column, Dataset};
use super::impurity::{entropy, gain, conditional_entropy};


/// Scores every attribute of a dataset against the decision column.
///
/// The designated numeric attribute, if any,
/// is scored through its median indicator (see [`Column::binarize`]).
#[derive(Debug, Clone)]
pub struct AttributeSelector {
    decision: String,
    numeric:  Option<String>,
}


/// The outcome of [`AttributeSelector::select`].
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    attribute: String,
    gain:      f64,
    derived:   Option<Column>,
}


impl AttributeSelector {
    /// Construct a selector for the decision column `decision`
    /// without a numeric attribute.
    pub fn new<S: ToString>(decision: S) -> Self {
        Self { decision: decision.to_string(), numeric: None, }
    }


    /// Split the attribute `name` at its median instead of by value.
    pub fn numeric_attribute<S: ToString>(mut self, name: S) -> Self {
        self.numeric = Some(name.to_string());
        self
    }


    /// Name of the decision column.
    pub fn decision(&self) -> &str {
        &self.decision
    }


    /// Name of the attribute split at its median, if any.
    pub fn numeric(&self) -> Option<&str> {
        self.numeric.as_deref()
    }


    /// Returns the attribute of `data` with maximal information gain
    /// about the decision column.
    ///
    /// Attributes are visited in column order and the first one
    /// reaching the maximum wins.
    /// An attribute whose working column holds a single value
    /// cannot split `data` and is skipped;
    /// `None` is returned when no attribute is left.
    ///
    /// `data` is not modified. When the numeric attribute wins,
    /// the returned [`Selection`] carries the indicator column,
    /// which [`Selection::materialize`] adds to the dataset.
    pub fn select(&self, data: &Dataset) -> Result<Option<Selection>> {
        if data.is_empty() {
            return Err(Id3Error::EmptyDataset);
        }
        let decision = data.column(&self.decision)?;
        let base = entropy(&decision.distribution()[..]);

        let candidates = data.columns()
            .iter()
            .filter(|column| column.name() != self.decision)
            .collect::<Vec<_>>();

        let scores = candidates.par_iter()
            .map(|column| self.score(column, decision, base))
            .collect::<Result<Vec<_>>>()?;

        let mut best: Option<Selection> = None;
        for (column, score) in candidates.into_iter().zip(scores) {
            let Some((gain, derived)) = score else { continue; };
            if best.as_ref().is_some_and(|b| gain <= b.gain) {
                continue;
            }
            let attribute = derived.as_ref()
                .map_or(column.name(), Column::name)
                .to_string();
            best = Some(Selection { attribute, gain, derived, });
        }

        if let Some(selection) = best.as_ref() {
            tracing::debug!(
                "selected `{}` (gain {:.6}) among {} rows",
                selection.attribute, selection.gain, data.shape().0,
            );
        }
        Ok(best)
    }


    /// Returns the gain of `column` and its working copy,
    /// or `None` if the working column is constant.
    fn score(&self, column: &Column, decision: &Column, base: f64)
        -> Result<Option<(f64, Option<Column>)>>
    {
        let derived = if self.numeric() == Some(column.name()) {
            let threshold = column.median()?;
            Some(column.binarize(threshold)?)
        } else {
            None
        };

        let key = derived.as_ref().unwrap_or(column);
        if key.distinct().len() < 2 {
            return Ok(None);
        }

        let conditional = conditional_entropy(key, decision)?;
        let gain = gain(base, conditional);
        tracing::trace!("gain of `{}` = {gain:.6}", key.name());

        Ok(Some((gain, derived)))
    }
}


impl Selection {
    /// Name of the chosen attribute.
    /// For the numeric attribute this is the indicator name, e.g. `Age<25.0`.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }


    /// Information gain of the chosen attribute.
    pub fn gain(&self) -> f64 {
        self.gain
    }


    /// Returns `true` if the attribute is a median indicator.
    pub fn is_derived(&self) -> bool {
        self.derived.is_some()
    }


    /// Returns `data` extended by the indicator column, if any,
    /// together with the name of the column to split on.
    pub fn materialize(self, data: Dataset) -> Result<(Dataset, String)> {
        let data = match self.derived {
            Some(column) => data.with_column(column)?,
            None => data,
        };
        Ok((data, self.attribute))
    }
}

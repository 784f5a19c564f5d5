//! The recursive ID3 tree growing.
use std::fmt;

use crate::error::{Id3Error, Result};
use crate::dataset::{Dataset, Value};
use super::{
    builder::EmptyPartition,
    id3_tree::Id3Tree,
    node::*,
    selector::AttributeSelector,
};


/// The ID3 algorithm.
/// Given a dataset and its decision column,
/// [`Id3`] grows an [`Id3Tree`] whose inner nodes split on the
/// attribute with maximal information gain,
/// one branch per observed value,
/// until every partition agrees on the decision.
///
/// [`Id3`] is constructed by [`Id3Builder`](crate::Id3Builder).
///
/// # Example
/// ```no_run
/// use id3tree::{DatasetReader, Id3Builder};
///
/// let dataset = DatasetReader::default()
///     .file("titanic-homework.csv")
///     .drop_column("PassengerId")
///     .drop_column("Name")
///     .read()
///     .unwrap();
///
/// let tree = Id3Builder::new("Survived")
///     .numeric_attribute("Age")
///     .build()
///     .build(dataset)
///     .unwrap();
/// println!("{tree}");
/// ```
#[derive(Debug, Clone)]
pub struct Id3 {
    selector:        AttributeSelector,
    empty_partition: EmptyPartition,
}


impl Id3 {
    /// Initialize [`Id3`].
    /// This method is called only via `Id3Builder::build`.
    #[inline]
    pub(super) fn new(
        selector:        AttributeSelector,
        empty_partition: EmptyPartition,
    ) -> Self
    {
        Self { selector, empty_partition, }
    }


    /// Name of the decision column.
    pub fn decision(&self) -> &str {
        self.selector.decision()
    }


    /// Grow a tree over `data`.
    /// The root always splits, even on a pure dataset,
    /// unless no attribute can separate the rows.
    pub fn build(&self, data: Dataset) -> Result<Id3Tree> {
        if data.is_empty() {
            return Err(Id3Error::EmptyDataset);
        }
        data.column(self.decision())?;

        let (n_rows, n_columns) = data.shape();
        tracing::info!(
            "growing ID3 tree for `{}` over {n_rows} rows x {n_columns} columns",
            self.decision(),
        );

        let root = self.split(data)?;
        let tree = Id3Tree::from(root);

        tracing::info!(
            "grown tree has depth {} and {} leaves",
            tree.depth(), tree.n_leaves(),
        );
        Ok(tree)
    }


    /// Grow the subtree for a partition of the rows,
    /// after discarding the column `exclude` the partition was cut on.
    ///
    /// A partition that agrees on the decision becomes a leaf.
    /// A partition without rows yields `Ok(None)` under
    /// [`EmptyPartition::Skip`] and an [`Id3Error::EmptyPartition`]
    /// under [`EmptyPartition::Error`].
    pub fn extend(&self, data: Dataset, exclude: &str) -> Result<Option<Node>> {
        if data.is_empty() {
            return match self.empty_partition {
                EmptyPartition::Skip => {
                    tracing::warn!("skipping empty partition below `{exclude}`");
                    Ok(None)
                },
                EmptyPartition::Error => {
                    Err(Id3Error::EmptyPartition { attribute: exclude.to_string() })
                },
            };
        }
        let data = data.without(exclude);

        let decisions = data.column(self.decision())?.distinct();
        if let [decision] = &decisions[..] {
            tracing::trace!("pure partition of {} rows -> {decision}", data.shape().0);
            return Ok(Some(Node::leaf(decision.clone())));
        }

        self.split(data).map(Some)
    }


    /// Split `data` on its best attribute and grow every branch.
    /// Falls back to a majority leaf if no attribute separates the rows.
    fn split(&self, data: Dataset) -> Result<Node> {
        let Some(selection) = self.selector.select(&data)? else {
            let decision = self.majority(&data)?;
            tracing::debug!(
                "no attribute splits {} rows; majority leaf {decision}",
                data.shape().0,
            );
            return Ok(Node::leaf(decision));
        };

        let (data, attribute) = selection.materialize(data)?;

        let mut values = data.column(&attribute)?.distinct();
        values.sort();

        let mut branches = Vec::with_capacity(values.len());
        for value in values {
            let partition = data.filter_eq(&attribute, &value)?;
            if let Some(child) = self.extend(partition, &attribute)? {
                branches.push(Branch::new(value, child));
            }
        }

        Ok(Node::attribute(attribute, branches))
    }


    /// Returns the most frequent decision in `data`.
    /// Ties go to the value seen first.
    fn majority(&self, data: &Dataset) -> Result<Value> {
        let mut best: Option<(Value, usize)> = None;
        for (value, count) in data.column(self.decision())?.value_counts() {
            if best.as_ref().map_or(true, |(_, c)| count > *c) {
                best = Some((value, count));
            }
        }
        best.map(|(value, _)| value)
            .ok_or(Id3Error::EmptyDataset)
    }
}


impl fmt::Display for Id3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # ID3 Decision Tree\n\n\
            - Decision column: {}\n\
            - Numeric attribute: {}\n\
            - Empty partitions: {}\
            ",
            self.decision(),
            self.selector.numeric().unwrap_or("(none)"),
            self.empty_partition,
        )?;

        write!(f, "----------")
    }
}

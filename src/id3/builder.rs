//! Configures and builds [`Id3`].
use std::fmt;

use crate::Id3;
use super::selector::AttributeSelector;


/// The attribute split at its median by default.
pub const DEFAULT_NUMERIC_ATTRIBUTE: &str = "Age";


/// What to do with a branch whose partition holds no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPartition {
    /// [`Id3::extend`] returns `None` and the branch is not emitted.
    #[default]
    Skip,
    /// Abort with [`Id3Error::EmptyPartition`](crate::Id3Error::EmptyPartition).
    Error,
}


impl fmt::Display for EmptyPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Skip  => "Skip",
            Self::Error => "Error",
        };

        write!(f, "{name}")
    }
}


/// A struct that builds [`Id3`].
/// `Id3Builder` keeps parameters for constructing [`Id3`].
///
/// # Example
///
/// ```
/// use id3tree::{Id3Builder, EmptyPartition};
///
/// let id3 = Id3Builder::new("Survived")
///     .numeric_attribute("Age")
///     .empty_partition(EmptyPartition::Skip)
///     .build();
/// assert_eq!(id3.decision(), "Survived");
/// ```
#[derive(Debug, Clone)]
pub struct Id3Builder {
    decision:        String,
    numeric:         Option<String>,
    empty_partition: EmptyPartition,
}


impl Id3Builder {
    /// Construct a new instance of [`Id3Builder`]
    /// that predicts the column `decision`.
    /// By default, [`Id3Builder`] sets the parameters as follows;
    /// ```text
    /// numeric_attribute: DEFAULT_NUMERIC_ATTRIBUTE == "Age",
    /// empty_partition: EmptyPartition::Skip,
    /// ```
    pub fn new<S: ToString>(decision: S) -> Self {
        Self {
            decision:        decision.to_string(),
            numeric:         Some(DEFAULT_NUMERIC_ATTRIBUTE.to_string()),
            empty_partition: EmptyPartition::default(),
        }
    }


    /// Set the attribute split at its median.
    pub fn numeric_attribute<S: ToString>(mut self, name: S) -> Self {
        self.numeric = Some(name.to_string());
        self
    }


    /// Split every attribute by value, with no median indicator.
    pub fn without_numeric_attribute(mut self) -> Self {
        self.numeric = None;
        self
    }


    /// Set the policy for branches without rows.
    /// Default value is `EmptyPartition::Skip`.
    #[inline]
    pub fn empty_partition(mut self, policy: EmptyPartition) -> Self {
        self.empty_partition = policy;
        self
    }


    /// Build an [`Id3`].
    /// This method consumes `self`.
    pub fn build(self) -> Id3 {
        let mut selector = AttributeSelector::new(self.decision);
        if let Some(numeric) = self.numeric {
            selector = selector.numeric_attribute(numeric);
        }

        Id3::new(selector, self.empty_partition)
    }
}

#![warn(missing_docs)]

//!
//! A crate that grows ID3 decision trees.
//!
//! At every node the tree splits on the attribute with maximal
//! information gain, measured with Shannon entropy,
//! and branches once per observed value of that attribute.
//! One designated numeric attribute (`Age` by default)
//! is split at its median instead,
//! through a derived indicator column named like `Age<28.0`.
//!
//! - [`DatasetReader`] loads a CSV file into a typed [`Dataset`].
//! - [`Id3Builder`] configures the learner, [`Id3`] grows an [`Id3Tree`].
//! - [`Id3Tree`] prints as an indented tree or exports to Graphviz.

pub mod error;
pub mod dataset;
pub mod id3;
pub mod logging;
pub mod prelude;


pub use error::{Id3Error, Result};

pub use dataset::{
    Column,
    Dataset,
    DatasetReader,
    Value,
};

pub use id3::{
    AttributeSelector,
    Selection,
    Id3,
    Id3Builder,
    Id3Tree,
    EmptyPartition,
    Node,
    Branch,
};

pub use id3::impurity::{entropy, gain, conditional_entropy};

//! Exports the dataset types, the learner and its tree.
//!
pub use crate::dataset::{
    Column,
    Dataset,
    DatasetReader,
    Value,
};


pub use crate::id3::{
    // Scoring ----------------------------------
    entropy,
    gain,
    conditional_entropy,
    AttributeSelector,
    Selection,


    // Tree growing -----------------------------
    Id3,
    Id3Builder,
    EmptyPartition,


    // Output -----------------------------------
    Id3Tree,
    Node,
    Branch,
};


pub use crate::error::Id3Error;

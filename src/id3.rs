//! The ID3 tree learner.
//! Splits are scored by Shannon entropy and information gain;
//! one designated numeric attribute is split at its median.

pub mod impurity;
pub mod selector;
pub mod node;
pub mod id3_tree;
pub mod builder;
pub mod id3_algorithm;


pub use impurity::{entropy, gain, conditional_entropy};
pub use selector::{AttributeSelector, Selection};
pub use node::{Node, Branch};
pub use id3_tree::Id3Tree;
pub use builder::{Id3Builder, EmptyPartition};
pub use id3_algorithm::Id3;

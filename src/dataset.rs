//! Struct `Dataset` represents a table of typed cells.

pub mod value;
pub mod column;
pub mod dataset_struct;
pub mod reader;


pub use value::Value;
pub use column::Column;
pub use dataset_struct::Dataset;
pub use reader::DatasetReader;

//! Defines the tree produced by [`Id3`](crate::Id3).
use std::fmt;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::error::Result;
use super::node::*;


/// An ID3 decision tree.
/// This struct is just a wrapper of [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub struct Id3Tree {
    root: Node,
}


impl From<Node> for Id3Tree {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Id3Tree {
    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the number of attribute nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Print the tree to the standard output,
    /// highlighting attribute names and decisions.
    pub fn print(&self) {
        let mut out = String::new();
        // Writing to a `String` does not fail.
        let _ = self.write_to(&mut out, true);
        print!("{out}");
    }


    /// Write the current tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph Id3Tree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }


    fn write_to<W: fmt::Write>(&self, f: &mut W, colored: bool) -> fmt::Result {
        writeln!(f, "{}", self.root.styled_label(colored))?;
        self.root.render(f, "", colored)
    }
}


impl fmt::Display for Id3Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, false)
    }
}

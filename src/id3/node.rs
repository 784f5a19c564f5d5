//! A node struct used in the ID3 algorithm.
use colored::Colorize;

use std::fmt;

use crate::dataset::Value;


/// A node of an ID3 tree.
/// Each node owns its children; there are no parent links.
#[derive(Clone, PartialEq)]
pub enum Node {
    /// An inner node that splits on `name`,
    /// with one branch per observed value.
    Attribute {
        /// The attribute split on.
        name:     String,
        /// One branch per observed value, in ascending order.
        branches: Vec<Branch>,
    },
    /// A terminal node holding a decision value.
    Leaf {
        /// The predicted decision.
        decision: Value,
    },
}


/// An edge from an attribute node to the subtree
/// of the rows taking `value`.
#[derive(Clone, PartialEq)]
pub struct Branch {
    /// The attribute value of the rows below.
    pub value: Value,
    /// The subtree grown on those rows.
    pub child: Box<Node>,
}


impl Branch {
    /// Construct a branch leading to `child`.
    pub fn new(value: Value, child: Node) -> Self {
        Self { value, child: Box::new(child), }
    }
}


impl Node {
    /// Construct an attribute node.
    pub fn attribute<S: ToString>(name: S, branches: Vec<Branch>) -> Self {
        Self::Attribute { name: name.to_string(), branches, }
    }


    /// Construct a leaf.
    pub fn leaf(decision: Value) -> Self {
        Self::Leaf { decision, }
    }


    /// Returns `true` for a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Returns the attribute name or the decision value of this node.
    pub fn label(&self) -> String {
        match self {
            Self::Attribute { name, .. } => name.clone(),
            Self::Leaf { decision, }     => decision.to_string(),
        }
    }


    /// Returns the branches of an attribute node,
    /// or an empty slice for a leaf.
    pub fn branches(&self) -> &[Branch] {
        match self {
            Self::Attribute { branches, .. } => &branches[..],
            Self::Leaf { .. } => &[],
        }
    }


    /// Returns the number of attribute nodes on the longest
    /// path from this node to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Self::Attribute { branches, .. } => {
                1 + branches.iter()
                    .map(|branch| branch.child.depth())
                    .max()
                    .unwrap_or(0)
            },
            Self::Leaf { .. } => 0,
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Attribute { branches, .. } => {
                branches.iter()
                    .map(|branch| branch.child.n_leaves())
                    .sum()
            },
            Self::Leaf { .. } => 1,
        }
    }


    /// Writes this sub-tree depth-first.
    /// The value nodes sit between an attribute and its child,
    /// one indentation level deeper than the attribute.
    pub(crate) fn render<W: fmt::Write>(
        &self,
        f:       &mut W,
        prefix:  &str,
        colored: bool,
    ) -> fmt::Result
    {
        let branches = self.branches();
        let n_branches = branches.len();
        for (i, branch) in branches.iter().enumerate() {
            let last = i + 1 == n_branches;
            let (stem, fill) = if last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            writeln!(f, "{prefix}{stem}{}", branch.value)?;

            let prefix = format!("{prefix}{fill}");
            writeln!(f, "{prefix}└── {}", branch.child.styled_label(colored))?;

            let prefix = format!("{prefix}    ");
            branch.child.render(f, &prefix, colored)?;
        }
        Ok(())
    }


    pub(crate) fn styled_label(&self, colored: bool) -> String {
        let label = self.label();
        if !colored {
            return label;
        }
        match self {
            Self::Attribute { .. } => label.bold().blue().to_string(),
            Self::Leaf { .. }      => label.green().to_string(),
        }
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Attribute { name, branches } => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{name}\" ];\n",
                    name = escape(name),
                )];

                let mut next_id = id + 1;
                for branch in branches {
                    let child_id = next_id;
                    let (mut child, return_id) = branch.child.to_dot_info(child_id);
                    info.append(&mut child);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                        value = escape(&branch.value.to_string()),
                    ));
                    next_id = return_id;
                }

                (info, next_id)
            },
            Node::Leaf { decision } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{decision}\", shape = box ];\n",
                    decision = escape(&decision.to_string()),
                );

                (vec![info], id + 1)
            },
        }
    }
}


fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}


impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attribute { name, branches } => {
                f.debug_struct("Attribute")
                    .field("name", &name)
                    .field("branches", &branches)
                    .finish()
            },
            Self::Leaf { decision } => {
                f.debug_struct("Leaf")
                    .field("decision", &decision)
                    .finish()
            },
        }
    }
}


impl fmt::Debug for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {:?}", self.value, self.child)
    }
}

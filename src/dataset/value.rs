//! A single cell of a [`Dataset`](crate::Dataset).
use ordered_float::OrderedFloat;

use std::fmt;


/// A typed cell.
/// Columns loaded from a file are homogeneous,
/// so values of different variants never meet in one column.
///
/// The derived ordering sorts integers before floats before strings,
/// and by value within a variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    /// Integral cell.
    Int(i64),
    /// Real-valued cell.
    Float(OrderedFloat<f64>),
    /// Free text or a categorical label.
    Str(String),
}


impl Value {
    /// Returns the numeric content of this cell,
    /// or `None` for a string.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v)   => Some(*v as f64),
            Self::Float(v) => Some(v.0),
            Self::Str(_)   => None,
        }
    }


    /// Returns `true` for an integer or a float.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Str(_))
    }
}


impl From<i64> for Value {
    #[inline]
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}


impl From<f64> for Value {
    #[inline]
    fn from(v: f64) -> Self {
        Self::Float(OrderedFloat(v))
    }
}


impl From<&str> for Value {
    #[inline]
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}


impl From<String> for Value {
    #[inline]
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}


/// Formats a float so that integral values keep one decimal place
/// (`25.0`, not `25`). Derived column names rely on this form.
pub(crate) fn format_float(v: f64) -> String {
    if v.is_finite() && v.fract() == 0f64 && v.abs() < 1e16 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}


impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v)   => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{}", format_float(v.0)),
            Self::Str(v)   => write!(f, "{v}"),
        }
    }
}

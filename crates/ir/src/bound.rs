use std::fmt;

use serde::{Deserialize, Serialize};

use crate::expr::Literal;
use crate::window::WindowSpec;

/// An expression after name resolution: columns are addressed by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoundExpr {
    ColumnRef { name: String, index: usize },
    Constant(Literal),
    Function { name: String, args: Vec<BoundExpr> },
}

pub type BoundWindowSpec = WindowSpec<BoundExpr>;

impl BoundExpr {
    pub fn column_ref(name: impl Into<String>, index: usize) -> Self {
        BoundExpr::ColumnRef {
            name: name.into(),
            index,
        }
    }
}

impl fmt::Display for BoundExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundExpr::ColumnRef { name, index } if name.is_empty() => write!(f, "#{}", index),
            BoundExpr::ColumnRef { name, .. } => write!(f, "{}", name),
            BoundExpr::Constant(lit) => write!(f, "{}", lit),
            BoundExpr::Function { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unnamed_column_ref_renders_index() {
        assert_eq!(BoundExpr::column_ref("", 3).to_string(), "#3");
        assert_eq!(BoundExpr::column_ref("price", 3).to_string(), "price");
    }

    #[test]
    fn test_bound_function_rendering() {
        let expr = BoundExpr::Function {
            name: "abs".to_string(),
            args: vec![BoundExpr::Constant(Literal::Int64(-2))],
        };
        assert_eq!(expr.to_string(), "abs(-2)");
    }
}

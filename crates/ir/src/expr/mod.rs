mod datetime;
mod literal;
mod operators;
mod types;

use std::fmt;

pub use datetime::*;
pub use literal::*;
pub use operators::*;
use serde::{Deserialize, Serialize};
pub use types::*;

/// A parsed scalar expression.
///
/// Window specs hold these as opaque children: they only ever render them,
/// compare them and deep-copy them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Literal(Literal),

    Column {
        table: Option<String>,
        name: String,
    },

    BinaryOp {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },

    Function {
        name: String,
        args: Vec<Expr>,
    },

    Cast {
        expr: Box<Expr>,
        type_name: String,
    },

    IsNull {
        expr: Box<Expr>,
        negated: bool,
    },

    Interval {
        value: Box<Expr>,
        leading_field: Option<DateTimeField>,
    },

    Star,
}

impl Expr {
    pub fn literal_null() -> Self {
        Expr::Literal(Literal::Null)
    }

    pub fn literal_i64(v: i64) -> Self {
        Expr::Literal(Literal::Int64(v))
    }

    pub fn literal_string(v: impl Into<String>) -> Self {
        Expr::Literal(Literal::String(v.into()))
    }

    pub fn column(name: impl Into<String>) -> Self {
        Expr::Column {
            table: None,
            name: name.into(),
        }
    }

    pub fn qualified_column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Expr::Column {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    pub fn function(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Function {
            name: name.into(),
            args,
        }
    }

    pub fn interval(value: Expr, leading_field: DateTimeField) -> Self {
        Expr::Interval {
            value: Box::new(value),
            leading_field: Some(leading_field),
        }
    }

    pub fn binary(self, op: BinaryOp, other: Expr) -> Self {
        Expr::BinaryOp {
            left: Box::new(self),
            op,
            right: Box::new(other),
        }
    }

    pub fn gt(self, other: Expr) -> Self {
        self.binary(BinaryOp::Gt, other)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(lit) => write!(f, "{}", lit),
            Expr::Column { table: Some(t), name } => write!(f, "{}.{}", t, name),
            Expr::Column { table: None, name } => write!(f, "{}", name),
            Expr::BinaryOp { left, op, right } => write!(f, "({} {} {})", left, op, right),
            Expr::Function { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Expr::Cast { expr, type_name } => write!(f, "CAST({} AS {})", expr, type_name),
            Expr::IsNull {
                expr,
                negated: false,
            } => write!(f, "({} IS NULL)", expr),
            Expr::IsNull {
                expr,
                negated: true,
            } => write!(f, "({} IS NOT NULL)", expr),
            Expr::Interval {
                value,
                leading_field: Some(field),
            } => write!(f, "INTERVAL {} {}", value, field),
            Expr::Interval {
                value,
                leading_field: None,
            } => write!(f, "INTERVAL {}", value),
            Expr::Star => write!(f, "*"),
        }
    }
}

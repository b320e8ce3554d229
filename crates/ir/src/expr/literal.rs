use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Null,
    Bool(bool),
    Int64(i64),
    Float64(ordered_float::OrderedFloat<f64>),
    Numeric(Decimal),
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => write!(f, "NULL"),
            Literal::Bool(true) => write!(f, "true"),
            Literal::Bool(false) => write!(f, "false"),
            Literal::Int64(v) => write!(f, "{}", v),
            Literal::Float64(v) => write!(f, "{:?}", v.0),
            Literal::Numeric(v) => write!(f, "{}", v),
            Literal::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literal_escapes_quotes() {
        let lit = Literal::String("it's".to_string());
        assert_eq!(lit.to_string(), "'it''s'");
    }

    #[test]
    fn test_float_literal_keeps_fraction() {
        let lit = Literal::Float64(ordered_float::OrderedFloat(2.0));
        assert_eq!(lit.to_string(), "2.0");
    }

    #[test]
    fn test_numeric_literal() {
        let lit = Literal::Numeric(Decimal::new(1250, 2));
        assert_eq!(lit.to_string(), "12.50");
    }
}

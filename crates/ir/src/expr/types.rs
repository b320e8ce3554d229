use std::fmt;

use serde::{Deserialize, Serialize};

use super::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Default,
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NullOrder {
    #[default]
    Default,
    NullsFirst,
    NullsLast,
}

/// One `ORDER BY` item. Generic over the expression flavor so parsed and
/// bound window specs share it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortExpr<E = Expr> {
    pub expr: E,
    pub direction: SortDirection,
    pub nulls: NullOrder,
}

impl<E> SortExpr<E> {
    pub fn new(expr: E) -> Self {
        Self {
            expr,
            direction: SortDirection::Default,
            nulls: NullOrder::Default,
        }
    }

    pub fn asc(expr: E) -> Self {
        Self::new(expr).with_direction(SortDirection::Asc)
    }

    pub fn desc(expr: E) -> Self {
        Self::new(expr).with_direction(SortDirection::Desc)
    }

    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_nulls(mut self, nulls: NullOrder) -> Self {
        self.nulls = nulls;
        self
    }

    pub fn try_map<T, Err>(
        &self,
        f: &mut impl FnMut(&E) -> Result<T, Err>,
    ) -> Result<SortExpr<T>, Err> {
        Ok(SortExpr {
            expr: f(&self.expr)?,
            direction: self.direction,
            nulls: self.nulls,
        })
    }
}

impl<E: fmt::Display> fmt::Display for SortExpr<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        match self.direction {
            SortDirection::Default => {}
            SortDirection::Asc => write!(f, " ASC")?,
            SortDirection::Desc => write!(f, " DESC")?,
        }
        match self.nulls {
            NullOrder::Default => {}
            NullOrder::NullsFirst => write!(f, " NULLS FIRST")?,
            NullOrder::NullsLast => write!(f, " NULLS LAST")?,
        }
        Ok(())
    }
}

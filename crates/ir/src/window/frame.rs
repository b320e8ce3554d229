use std::fmt;

use serde::{Deserialize, Serialize};

/// One side of a window frame. Start and end are tracked independently.
///
/// `Invalid` is the unset state left by construction; a fully bound spec
/// never carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoundaryKind {
    #[default]
    Invalid,
    UnboundedPreceding,
    UnboundedFollowing,
    CurrentRowRange,
    CurrentRowRows,
    ExprPrecedingRows,
    ExprFollowingRows,
    ExprPrecedingRange,
    ExprFollowingRange,
}

impl BoundaryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryKind::Invalid => "INVALID",
            BoundaryKind::UnboundedPreceding => "UNBOUNDED_PRECEDING",
            BoundaryKind::UnboundedFollowing => "UNBOUNDED_FOLLOWING",
            BoundaryKind::CurrentRowRange => "CURRENT_ROW_RANGE",
            BoundaryKind::CurrentRowRows => "CURRENT_ROW_ROWS",
            BoundaryKind::ExprPrecedingRows => "EXPR_PRECEDING_ROWS",
            BoundaryKind::ExprFollowingRows => "EXPR_FOLLOWING_ROWS",
            BoundaryKind::ExprPrecedingRange => "EXPR_PRECEDING_RANGE",
            BoundaryKind::ExprFollowingRange => "EXPR_FOLLOWING_RANGE",
        }
    }

    /// True for the four variants that carry an offset expression.
    pub fn requires_expr(&self) -> bool {
        matches!(
            self,
            BoundaryKind::ExprPrecedingRows
                | BoundaryKind::ExprFollowingRows
                | BoundaryKind::ExprPrecedingRange
                | BoundaryKind::ExprFollowingRange
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExcludeKind {
    #[default]
    None,
    CurrentRow,
    Group,
    Ties,
}

impl ExcludeKind {
    /// Keyword text following `EXCLUDE`, or `None` when no clause is printed.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            ExcludeKind::None => None,
            ExcludeKind::CurrentRow => Some("CURRENT ROW"),
            ExcludeKind::Group => Some("GROUP"),
            ExcludeKind::Ties => Some("TIES"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FrameUnit {
    #[default]
    Rows,
    Range,
}

impl fmt::Display for FrameUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FrameUnit::Rows => "ROWS",
            FrameUnit::Range => "RANGE",
        })
    }
}

//! Expression nodes and window function specs.

pub mod bound;
pub mod expr;
pub mod window;

pub use bound::{BoundExpr, BoundWindowSpec};
pub use expr::{
    BinaryOp, DateTimeField, Expr, Literal, NullOrder, SortDirection, SortExpr,
};
pub use window::{
    BoundaryKind, ExcludeKind, FrameUnit, WindowFunctionKind, WindowSpec, classify, render,
};

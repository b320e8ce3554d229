//! windowsql - window function IR with canonical SQL rendering.
//!
//! A window function call such as
//! `SUM(x) OVER (PARTITION BY p ORDER BY s ROWS BETWEEN 1 PRECEDING AND CURRENT ROW)`
//! is held as a [`WindowSpec`] and turned back into SQL text by [`render`].
//!
//! # Architecture
//!
//! ```text
//! parser/binder → WindowSpec → render → SQL text (EXPLAIN, view definitions, cache keys)
//! ```
//!
//! Specs compare structurally (`==`) and deep-copy (`clone`). The same
//! renderer handles the parsed flavor (`WindowSpec<Expr>`) and the bound
//! flavor ([`BoundWindowSpec`]).
//!
//! # Example
//!
//! ```rust
//! use windowsql::{BoundaryKind, Expr, SortExpr, WindowSpec};
//!
//! let spec = WindowSpec::new("", "", "sum")
//!     .unwrap()
//!     .with_children(vec![Expr::column("x")])
//!     .with_partitions(vec![Expr::column("p")])
//!     .with_orders(vec![SortExpr::new(Expr::column("s"))])
//!     .with_frame(
//!         BoundaryKind::ExprPrecedingRows,
//!         Some(Expr::literal_i64(1)),
//!         BoundaryKind::CurrentRowRows,
//!         None,
//!     );
//!
//! assert_eq!(
//!     spec.to_sql().unwrap(),
//!     "sum(x) OVER (PARTITION BY p ORDER BY s ROWS BETWEEN 1 PRECEDING AND CURRENT ROW)"
//! );
//! ```

pub use windowsql_common::error::{Error, Result};
pub use windowsql_ir::{
    BinaryOp, BoundExpr, BoundWindowSpec, BoundaryKind, DateTimeField, ExcludeKind, Expr,
    FrameUnit, Literal, NullOrder, SortDirection, SortExpr, WindowFunctionKind,
    WindowSpec, classify, render,
};

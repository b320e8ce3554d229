//! Window function calls: `f(args) [FILTER (...)] OVER (...)`.
//!
//! A [`WindowSpec`] is populated once by the parser (or produced from another
//! spec by a rewrite pass) and is read-only afterwards. Equality and deep
//! copies come from the derived `PartialEq` and `Clone`; the canonical SQL
//! text comes from [`render`].

mod frame;
mod function;
mod render;

pub use frame::{BoundaryKind, ExcludeKind, FrameUnit};
pub use function::{WindowFunctionKind, classify};
pub use render::render;
use serde::{Deserialize, Serialize};
use windowsql_common::error::{Error, Result};

use crate::expr::{Expr, SortExpr};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec<E = Expr> {
    pub catalog: String,
    pub schema: String,
    pub function_name: String,
    pub children: Vec<E>,
    pub partitions: Vec<E>,
    /// Frame ordering, the `ORDER BY` inside `OVER (...)`.
    pub orders: Vec<SortExpr<E>>,
    pub filter: Option<Box<E>>,
    pub ignore_nulls: bool,
    pub distinct: bool,
    pub start: BoundaryKind,
    pub end: BoundaryKind,
    pub exclude: ExcludeKind,
    pub start_expr: Option<Box<E>>,
    pub end_expr: Option<Box<E>>,
    /// LEAD/LAG offset argument.
    pub offset_expr: Option<Box<E>>,
    /// LEAD/LAG default value argument.
    pub default_expr: Option<Box<E>>,
    /// Argument ordering, e.g. the `x` in `FIRST_VALUE(a ORDER BY x) OVER (...)`.
    /// Never mixed up with `orders`.
    pub arg_orders: Vec<SortExpr<E>>,
}

impl<E> WindowSpec<E> {
    pub fn new(
        catalog: impl Into<String>,
        schema: impl Into<String>,
        function_name: impl Into<String>,
    ) -> Result<Self> {
        let function_name = function_name.into();
        if function_name.is_empty() {
            return Err(Error::malformed_spec("window function name must not be empty"));
        }
        Ok(Self {
            catalog: catalog.into(),
            schema: schema.into(),
            function_name,
            children: Vec::new(),
            partitions: Vec::new(),
            orders: Vec::new(),
            filter: None,
            ignore_nulls: false,
            distinct: false,
            start: BoundaryKind::Invalid,
            end: BoundaryKind::Invalid,
            exclude: ExcludeKind::None,
            start_expr: None,
            end_expr: None,
            offset_expr: None,
            default_expr: None,
            arg_orders: Vec::new(),
        })
    }

    pub fn with_children(mut self, children: Vec<E>) -> Self {
        self.children = children;
        self
    }

    pub fn with_distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    pub fn with_ignore_nulls(mut self, ignore_nulls: bool) -> Self {
        self.ignore_nulls = ignore_nulls;
        self
    }

    pub fn with_filter(mut self, filter: E) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn with_partitions(mut self, partitions: Vec<E>) -> Self {
        self.partitions = partitions;
        self
    }

    pub fn with_orders(mut self, orders: Vec<SortExpr<E>>) -> Self {
        self.orders = orders;
        self
    }

    pub fn with_arg_orders(mut self, arg_orders: Vec<SortExpr<E>>) -> Self {
        self.arg_orders = arg_orders;
        self
    }

    /// Sets both frame bounds. Offsets are only meaningful for the `Expr*`
    /// boundary kinds.
    pub fn with_frame(
        mut self,
        start: BoundaryKind,
        start_expr: Option<E>,
        end: BoundaryKind,
        end_expr: Option<E>,
    ) -> Self {
        self.start = start;
        self.start_expr = start_expr.map(Box::new);
        self.end = end;
        self.end_expr = end_expr.map(Box::new);
        self
    }

    pub fn with_offset(mut self, offset: E) -> Self {
        self.offset_expr = Some(Box::new(offset));
        self
    }

    pub fn with_default(mut self, default: E) -> Self {
        self.default_expr = Some(Box::new(default));
        self
    }

    pub fn with_exclude(mut self, exclude: ExcludeKind) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn is_window(&self) -> bool {
        true
    }

    pub fn function_kind(&self) -> WindowFunctionKind {
        classify(&self.function_name)
    }

    /// Builds a spec of another expression flavor by converting every owned
    /// expression with `f`. Flags, names and boundary kinds are copied as is.
    pub fn try_map_exprs<T, Err>(
        &self,
        mut f: impl FnMut(&E) -> std::result::Result<T, Err>,
    ) -> std::result::Result<WindowSpec<T>, Err> {
        let children = self
            .children
            .iter()
            .map(&mut f)
            .collect::<std::result::Result<Vec<_>, Err>>()?;
        let partitions = self
            .partitions
            .iter()
            .map(&mut f)
            .collect::<std::result::Result<Vec<_>, Err>>()?;
        let orders = self
            .orders
            .iter()
            .map(|o| o.try_map(&mut f))
            .collect::<std::result::Result<Vec<_>, Err>>()?;
        let arg_orders = self
            .arg_orders
            .iter()
            .map(|o| o.try_map(&mut f))
            .collect::<std::result::Result<Vec<_>, Err>>()?;
        let filter = map_boxed(&self.filter, &mut f)?;
        let start_expr = map_boxed(&self.start_expr, &mut f)?;
        let end_expr = map_boxed(&self.end_expr, &mut f)?;
        let offset_expr = map_boxed(&self.offset_expr, &mut f)?;
        let default_expr = map_boxed(&self.default_expr, &mut f)?;

        Ok(WindowSpec {
            catalog: self.catalog.clone(),
            schema: self.schema.clone(),
            function_name: self.function_name.clone(),
            children,
            partitions,
            orders,
            filter,
            ignore_nulls: self.ignore_nulls,
            distinct: self.distinct,
            start: self.start,
            end: self.end,
            exclude: self.exclude,
            start_expr,
            end_expr,
            offset_expr,
            default_expr,
            arg_orders,
        })
    }
}

impl<E: std::fmt::Display> WindowSpec<E> {
    pub fn to_sql(&self) -> Result<String> {
        render(self)
    }
}

fn map_boxed<E, T, Err>(
    expr: &Option<Box<E>>,
    f: &mut impl FnMut(&E) -> std::result::Result<T, Err>,
) -> std::result::Result<Option<Box<T>>, Err> {
    expr.as_deref().map(|e| f(e).map(Box::new)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::BoundExpr;
    use crate::expr::SortDirection;

    fn running_sum() -> WindowSpec {
        WindowSpec::new("", "", "sum")
            .unwrap()
            .with_children(vec![Expr::column("x")])
            .with_partitions(vec![Expr::column("p")])
            .with_orders(vec![SortExpr::asc(Expr::column("s"))])
            .with_frame(
                BoundaryKind::ExprPrecedingRows,
                Some(Expr::literal_i64(1)),
                BoundaryKind::CurrentRowRows,
                None,
            )
    }

    #[test]
    fn test_new_rejects_empty_function_name() {
        let err = WindowSpec::<Expr>::new("", "main", "").unwrap_err();
        assert!(err.is_malformed_spec());
    }

    #[test]
    fn test_new_starts_unbound() {
        let spec = WindowSpec::<Expr>::new("memory", "main", "rank").unwrap();
        assert_eq!(spec.catalog, "memory");
        assert_eq!(spec.start, BoundaryKind::Invalid);
        assert_eq!(spec.end, BoundaryKind::Invalid);
        assert_eq!(spec.exclude, ExcludeKind::None);
        assert!(spec.children.is_empty());
        assert!(spec.is_window());
        assert_eq!(spec.function_kind(), WindowFunctionKind::Rank);
    }

    #[test]
    fn test_clone_is_equal() {
        let spec = running_sum();
        assert_eq!(spec, spec.clone());
    }

    #[test]
    fn test_mutating_clone_leaves_original_untouched() {
        let spec = running_sum();
        let mut copy = spec.clone();
        *copy.start_expr.as_mut().unwrap() = Box::new(Expr::literal_i64(5));
        copy.partitions[0] = Expr::column("q");

        assert_eq!(spec.start_expr.as_deref(), Some(&Expr::literal_i64(1)));
        assert_eq!(spec.partitions[0], Expr::column("p"));
        assert_ne!(spec, copy);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = running_sum().with_partitions(vec![Expr::column("p"), Expr::column("q")]);
        let b = running_sum().with_partitions(vec![Expr::column("q"), Expr::column("p")]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_distinguishes_arg_orders_from_orders() {
        let base = WindowSpec::<Expr>::new("", "", "first_value")
            .unwrap()
            .with_children(vec![Expr::column("a")])
            .with_frame(
                BoundaryKind::UnboundedPreceding,
                None,
                BoundaryKind::CurrentRowRange,
                None,
            );
        let frame_ordered = base
            .clone()
            .with_orders(vec![SortExpr::new(Expr::column("x"))]);
        let arg_ordered = base.with_arg_orders(vec![SortExpr::new(Expr::column("x"))]);
        assert_ne!(frame_ordered, arg_ordered);
    }

    #[test]
    fn test_function_name_compares_byte_for_byte() {
        let lower = running_sum();
        let mut upper = running_sum();
        upper.function_name = "SUM".to_string();
        assert_ne!(lower, upper);
        assert_eq!(lower.function_kind(), upper.function_kind());
    }

    #[test]
    fn test_try_map_exprs_binds_columns() {
        let spec = running_sum();
        let columns = ["p", "s", "x"];
        let bound = spec
            .try_map_exprs(|e| match e {
                Expr::Column { name, .. } => columns
                    .iter()
                    .position(|c| c == name)
                    .map(|index| BoundExpr::column_ref(name.clone(), index))
                    .ok_or_else(|| format!("unknown column {}", name)),
                Expr::Literal(lit) => Ok(BoundExpr::Constant(lit.clone())),
                other => Err(format!("unsupported expression {}", other)),
            })
            .unwrap();

        assert_eq!(bound.children, vec![BoundExpr::column_ref("x", 2)]);
        assert_eq!(bound.partitions, vec![BoundExpr::column_ref("p", 0)]);
        assert_eq!(bound.orders[0].expr, BoundExpr::column_ref("s", 1));
        assert_eq!(bound.orders[0].direction, SortDirection::Asc);
        assert_eq!(bound.start, BoundaryKind::ExprPrecedingRows);
        assert_eq!(bound.end, BoundaryKind::CurrentRowRows);
        assert_eq!(bound.to_sql().unwrap(), spec.to_sql().unwrap());
    }

    #[test]
    fn test_try_map_exprs_propagates_errors() {
        let spec = running_sum();
        let result = spec.try_map_exprs(|e| match e {
            Expr::Column { name, .. } if name == "s" => Err("cannot bind s"),
            other => Ok(other.clone()),
        });
        assert_eq!(result.unwrap_err(), "cannot bind s");
    }

    #[test]
    fn test_serde_round_trip_preserves_equality() {
        let spec = running_sum()
            .with_filter(Expr::column("x").gt(Expr::literal_i64(0)))
            .with_exclude(ExcludeKind::Group);
        let json = serde_json::to_string(&spec).unwrap();
        let restored: WindowSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, restored);
    }
}

//! Testing utilities for windowsql.

#![allow(dead_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![allow(missing_docs)]

use std::fmt;

use windowsql::{BoundaryKind, Expr, Result, SortExpr, WindowSpec};

pub fn col(name: &str) -> Expr {
    Expr::column(name)
}

pub fn int(value: i64) -> Expr {
    Expr::literal_i64(value)
}

pub fn asc(name: &str) -> SortExpr {
    SortExpr::asc(col(name))
}

pub fn desc(name: &str) -> SortExpr {
    SortExpr::desc(col(name))
}

/// A call with the given arguments and the SQL default frame
/// (`RANGE BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW`).
pub fn window_call(function_name: &str, args: Vec<Expr>) -> WindowSpec {
    WindowSpec::new("", "", function_name)
        .expect("function name should not be empty")
        .with_children(args)
        .with_frame(
            BoundaryKind::UnboundedPreceding,
            None,
            BoundaryKind::CurrentRowRange,
            None,
        )
}

pub fn sum_over(column: &str) -> WindowSpec {
    window_call("sum", vec![col(column)])
}

pub fn assert_renders<E: fmt::Display + fmt::Debug>(spec: &WindowSpec<E>, expected: &str) {
    match spec.to_sql() {
        Ok(sql) => assert_eq!(sql, expected, "rendered SQL mismatch for {:?}", spec),
        Err(e) => panic!("Expected '{}' but rendering failed: {}", expected, e),
    }
}

pub fn assert_error_contains<T: fmt::Debug>(result: Result<T>, keywords: &[&str]) {
    match result {
        Ok(value) => panic!("Expected error but got Ok result: {:?}", value),
        Err(e) => {
            let error_msg = e.to_string().to_lowercase();
            let found = keywords
                .iter()
                .any(|keyword| error_msg.contains(&keyword.to_lowercase()));
            assert!(
                found,
                "Error message '{}' does not contain any of the expected keywords: {:?}",
                e, keywords
            );
        }
    }
}

pub fn build_partition_list(prefix: &str, count: usize) -> Vec<Expr> {
    (0..count).map(|i| col(&format!("{}{}", prefix, i))).collect()
}

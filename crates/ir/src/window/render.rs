use std::fmt;

use debug_print::debug_eprintln;
use windowsql_common::error::{Error, Result};

use super::{BoundaryKind, ExcludeKind, FrameUnit, WindowSpec};

/// Reconstructs SQL text for a window function call.
///
/// The same algorithm serves every expression flavor: children only need to
/// render themselves through `Display`. Fails with [`Error::MalformedSpec`]
/// when a frame bound is unset, when the frame starts at `UNBOUNDED
/// FOLLOWING`, or when an offset bound has no offset expression.
pub fn render<E: fmt::Display>(spec: &WindowSpec<E>) -> Result<String> {
    let mut result = if spec.schema.is_empty() {
        spec.function_name.clone()
    } else {
        format!("{}.{}", spec.schema, spec.function_name)
    };
    result.push('(');

    // Only the first argument carries DISTINCT.
    let args: Vec<String> = spec
        .children
        .iter()
        .enumerate()
        .map(|(i, child)| {
            if i == 0 && spec.distinct {
                format!("DISTINCT {}", child)
            } else {
                child.to_string()
            }
        })
        .collect();
    result.push_str(&args.join(", "));

    if let Some(offset) = &spec.offset_expr {
        result.push_str(&format!(", {}", offset));
    }
    if let Some(default) = &spec.default_expr {
        result.push_str(&format!(", {}", default));
    }

    if !spec.arg_orders.is_empty() {
        result.push_str(" ORDER BY ");
        result.push_str(&join(&spec.arg_orders));
    }

    if spec.ignore_nulls {
        result.push_str(" IGNORE NULLS");
    }

    if let Some(filter) = &spec.filter {
        result.push_str(&format!(") FILTER (WHERE {}", filter));
    }

    result.push_str(") OVER (");
    let mut sep = "";

    if !spec.partitions.is_empty() {
        result.push_str("PARTITION BY ");
        result.push_str(&join(&spec.partitions));
        sep = " ";
    }

    if !spec.orders.is_empty() {
        result.push_str(sep);
        result.push_str("ORDER BY ");
        result.push_str(&join(&spec.orders));
        sep = " ";
    }

    let frame = frame_bounds(spec)?;
    if !frame.from.is_empty() || !frame.to.is_empty() {
        result.push_str(sep);
        result.push_str(&frame.units.to_string());
    }
    match (frame.from.is_empty(), frame.to.is_empty()) {
        (false, false) => {
            result.push_str(&format!(" BETWEEN {} AND {}", frame.from, frame.to));
        }
        (false, true) => {
            result.push(' ');
            result.push_str(&frame.from);
        }
        (true, false) => {
            result.push(' ');
            result.push_str(&frame.to);
        }
        (true, true) => {}
    }

    if let Some(keyword) = spec.exclude.keyword() {
        result.push_str(" EXCLUDE ");
        result.push_str(keyword);
    }

    result.push(')');
    Ok(result)
}

struct FrameBounds {
    units: FrameUnit,
    from: String,
    to: String,
}

/// Derives the frame units and the text of both bounds. An empty bound is
/// left out of the output: `RANGE BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW`
/// is the SQL default frame, so either half of it is dropped when paired with
/// the other. An EXCLUDE clause needs both bounds spelled out.
fn frame_bounds<E: fmt::Display>(spec: &WindowSpec<E>) -> Result<FrameBounds> {
    let mut units = FrameUnit::Rows;
    let start_offset = offset_text(spec.start_expr.as_deref(), "start", spec.start)?;
    let end_offset = offset_text(spec.end_expr.as_deref(), "end", spec.end)?;

    let mut from = match spec.start {
        BoundaryKind::CurrentRowRange => {
            units = FrameUnit::Range;
            "CURRENT ROW".to_string()
        }
        BoundaryKind::CurrentRowRows => {
            units = FrameUnit::Rows;
            "CURRENT ROW".to_string()
        }
        BoundaryKind::UnboundedPreceding => {
            if spec.end == BoundaryKind::CurrentRowRange {
                String::new()
            } else {
                "UNBOUNDED PRECEDING".to_string()
            }
        }
        BoundaryKind::ExprPrecedingRows => {
            units = FrameUnit::Rows;
            format!("{} PRECEDING", start_offset)
        }
        BoundaryKind::ExprPrecedingRange => {
            units = FrameUnit::Range;
            format!("{} PRECEDING", start_offset)
        }
        BoundaryKind::ExprFollowingRows => {
            units = FrameUnit::Rows;
            format!("{} FOLLOWING", start_offset)
        }
        BoundaryKind::ExprFollowingRange => {
            units = FrameUnit::Range;
            format!("{} FOLLOWING", start_offset)
        }
        BoundaryKind::Invalid | BoundaryKind::UnboundedFollowing => {
            return Err(malformed(format!(
                "unrecognized frame start {}",
                spec.start.as_str()
            )));
        }
    };

    let mut to = match spec.end {
        BoundaryKind::CurrentRowRange => {
            if spec.start == BoundaryKind::UnboundedPreceding {
                String::new()
            } else {
                units = FrameUnit::Range;
                "CURRENT ROW".to_string()
            }
        }
        BoundaryKind::CurrentRowRows => {
            units = FrameUnit::Rows;
            "CURRENT ROW".to_string()
        }
        BoundaryKind::UnboundedPreceding => "UNBOUNDED PRECEDING".to_string(),
        BoundaryKind::UnboundedFollowing => "UNBOUNDED FOLLOWING".to_string(),
        BoundaryKind::ExprPrecedingRows => {
            units = FrameUnit::Rows;
            format!("{} PRECEDING", end_offset)
        }
        BoundaryKind::ExprPrecedingRange => {
            units = FrameUnit::Range;
            format!("{} PRECEDING", end_offset)
        }
        BoundaryKind::ExprFollowingRows => {
            units = FrameUnit::Rows;
            format!("{} FOLLOWING", end_offset)
        }
        BoundaryKind::ExprFollowingRange => {
            units = FrameUnit::Range;
            format!("{} FOLLOWING", end_offset)
        }
        BoundaryKind::Invalid => {
            return Err(malformed(format!(
                "unrecognized frame end {}",
                spec.end.as_str()
            )));
        }
    };

    if spec.exclude != ExcludeKind::None {
        if from.is_empty() {
            from = "UNBOUNDED PRECEDING".to_string();
        }
        if to.is_empty() {
            to = "CURRENT ROW".to_string();
            units = FrameUnit::Range;
        }
    }

    Ok(FrameBounds { units, from, to })
}

/// Offset text for one bound. Empty for bound kinds without an offset; a
/// stray offset on such a bound is ignored.
fn offset_text<E: fmt::Display>(
    expr: Option<&E>,
    side: &str,
    kind: BoundaryKind,
) -> Result<String> {
    if !kind.requires_expr() {
        return Ok(String::new());
    }
    match expr {
        Some(expr) => Ok(expr.to_string()),
        None => Err(malformed(format!(
            "frame {} {} requires an offset expression",
            side,
            kind.as_str()
        ))),
    }
}

fn malformed(msg: String) -> Error {
    debug_eprintln!("[ir::window::render] {}", msg);
    Error::malformed_spec(msg)
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

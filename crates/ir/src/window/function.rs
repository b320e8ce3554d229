use debug_print::debug_eprintln;
use serde::{Deserialize, Serialize};

/// Built-in window functions. Anything else called with `OVER` is an
/// aggregate evaluated over the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowFunctionKind {
    Aggregate,
    RowNumber,
    Rank,
    DenseRank,
    PercentRank,
    CumeDist,
    Ntile,
    Lead,
    Lag,
    FirstValue,
    LastValue,
    NthValue,
}

impl WindowFunctionKind {
    pub fn name(&self) -> &'static str {
        match self {
            WindowFunctionKind::Aggregate => "aggregate",
            WindowFunctionKind::RowNumber => "row_number",
            WindowFunctionKind::Rank => "rank",
            WindowFunctionKind::DenseRank => "dense_rank",
            WindowFunctionKind::PercentRank => "percent_rank",
            WindowFunctionKind::CumeDist => "cume_dist",
            WindowFunctionKind::Ntile => "ntile",
            WindowFunctionKind::Lead => "lead",
            WindowFunctionKind::Lag => "lag",
            WindowFunctionKind::FirstValue => "first_value",
            WindowFunctionKind::LastValue => "last_value",
            WindowFunctionKind::NthValue => "nth_value",
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, WindowFunctionKind::Aggregate)
    }

    /// LEAD and LAG take the extra offset and default arguments.
    pub fn is_offset_function(&self) -> bool {
        matches!(self, WindowFunctionKind::Lead | WindowFunctionKind::Lag)
    }
}

/// Maps a function name to its window function kind, ignoring case.
pub fn classify(function_name: &str) -> WindowFunctionKind {
    match function_name.to_ascii_lowercase().as_str() {
        "row_number" => WindowFunctionKind::RowNumber,
        "rank" => WindowFunctionKind::Rank,
        "dense_rank" | "rank_dense" => WindowFunctionKind::DenseRank,
        "percent_rank" => WindowFunctionKind::PercentRank,
        "cume_dist" => WindowFunctionKind::CumeDist,
        "ntile" => WindowFunctionKind::Ntile,
        "lead" => WindowFunctionKind::Lead,
        "lag" => WindowFunctionKind::Lag,
        "first_value" | "first" => WindowFunctionKind::FirstValue,
        "last_value" | "last" => WindowFunctionKind::LastValue,
        "nth_value" => WindowFunctionKind::NthValue,
        _ => {
            debug_eprintln!(
                "[ir::window::function] '{}' is not a built-in window function, treating as aggregate",
                function_name
            );
            WindowFunctionKind::Aggregate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("row_number"), WindowFunctionKind::RowNumber);
        assert_eq!(classify("ROW_NUMBER"), WindowFunctionKind::RowNumber);
        assert_eq!(classify("Lead"), WindowFunctionKind::Lead);
    }

    #[test]
    fn test_classify_aliases() {
        assert_eq!(classify("rank_dense"), WindowFunctionKind::DenseRank);
        assert_eq!(classify("first"), WindowFunctionKind::FirstValue);
        assert_eq!(classify("last"), WindowFunctionKind::LastValue);
    }

    #[test]
    fn test_unknown_names_are_aggregates() {
        assert_eq!(classify("sum"), WindowFunctionKind::Aggregate);
        assert_eq!(classify("my_udf"), WindowFunctionKind::Aggregate);
        assert_eq!(classify(""), WindowFunctionKind::Aggregate);
        assert!(classify("count").is_aggregate());
    }

    #[test]
    fn test_offset_functions() {
        assert!(classify("lag").is_offset_function());
        assert!(classify("LEAD").is_offset_function());
        assert!(!classify("nth_value").is_offset_function());
    }

    #[test]
    fn test_name_classifies_back_to_itself() {
        for kind in [
            WindowFunctionKind::RowNumber,
            WindowFunctionKind::Rank,
            WindowFunctionKind::DenseRank,
            WindowFunctionKind::PercentRank,
            WindowFunctionKind::CumeDist,
            WindowFunctionKind::Ntile,
            WindowFunctionKind::Lead,
            WindowFunctionKind::Lag,
            WindowFunctionKind::FirstValue,
            WindowFunctionKind::LastValue,
            WindowFunctionKind::NthValue,
        ] {
            assert_eq!(classify(kind.name()), kind);
        }
    }
}

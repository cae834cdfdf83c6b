use crate::common::*;

use crate::errors::trend_error::*;

#[doc = r#"
    Result category of an expectation.

    A single parsed value is shared by the series builder and the axis policy
    selector, so the two can never disagree on how a result type is handled.

    - `ColumnMapExpectation`: per-row checks reporting `unexpected_percent`
    - `ColumnAggregateExpectation` / `Expectation`: checks reporting a raw
      `observed_value`
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultType {
    ColumnMapExpectation,
    ColumnAggregateExpectation,
    Expectation,
}

impl FromStr for ResultType {
    type Err = TrendChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "column_map_expectation" => Ok(ResultType::ColumnMapExpectation),
            "column_aggregate_expectation" => Ok(ResultType::ColumnAggregateExpectation),
            "expectation" => Ok(ResultType::Expectation),
            other => Err(TrendChartError::UnsupportedResultType(other.to_string())),
        }
    }
}

impl ResultType {
    #[doc = "True when the pass rate is a bounded percentage rather than a raw observed value"]
    pub fn is_percentage_based(&self) -> bool {
        matches!(self, ResultType::ColumnMapExpectation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_known_categories() {
        assert_eq!(
            "column_map_expectation".parse::<ResultType>().unwrap(),
            ResultType::ColumnMapExpectation
        );
        assert_eq!(
            "column_aggregate_expectation"
                .parse::<ResultType>()
                .unwrap(),
            ResultType::ColumnAggregateExpectation
        );
        assert_eq!(
            "expectation".parse::<ResultType>().unwrap(),
            ResultType::Expectation
        );
    }

    #[test]
    fn rejects_unknown_category() {
        let err = "unknown_type".parse::<ResultType>().unwrap_err();
        assert_eq!(
            err,
            TrendChartError::UnsupportedResultType("unknown_type".to_string())
        );
    }
}

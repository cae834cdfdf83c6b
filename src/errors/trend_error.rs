use crate::common::*;

#[doc = r#"
    Fatal configuration/data errors of the trend chart transformation.

    Both variants signal a caller bug rather than a transient condition, so
    neither is retried - they propagate to whoever owns rendering.
"#]
#[derive(Debug, Error, PartialEq)]
pub enum TrendChartError {
    #[error("unsupported result type: '{0}'")]
    UnsupportedResultType(String),

    #[error("malformed validation record at '{run_date}': missing numeric field '{field}'")]
    MalformedRecord {
        run_date: String,
        field: &'static str,
    },
}

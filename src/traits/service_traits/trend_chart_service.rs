use crate::common::*;

use crate::dto::validation_record::*;
use crate::enums::result_type::*;
use crate::errors::trend_error::*;
use crate::model::chart::{chart_config::*, trend_point::*};

#[doc = r#"
    Shapes one expectation's validation runs into a renderer-ready trend chart
    configuration.

    Pure and synchronous: everything is a function of the records, the result
    type, and the caller-supplied render time. No drawing happens here - the
    returned configuration is handed to the external charting collaborator.
"#]
pub trait TrendChartService: Send + Sync {
    #[doc = r#"
        Builds the index-aligned pass-rate and SLA series.

        # Arguments
        * `validations` - chronologically ordered validation runs
        * `result_type` - result category of the expectation

        # Returns
        * `TrendSeries` - one entry per record in both series
        * `TrendChartError` - on a malformed record
    "#]
    fn build_trend_series(
        &self,
        validations: &[ValidationRecord],
        result_type: ResultType,
    ) -> Result<TrendSeries, TrendChartError>;

    #[doc = r#"
        Assembles the full declarative chart configuration.

        # Arguments
        * `validations` - chronologically ordered validation runs
        * `result_type` - result category of the expectation
        * `now` - render time; the X window is `[now - 7d, now]`

        # Returns
        * `ChartConfig` - the complete renderer-agnostic configuration
    "#]
    fn build_chart_config(
        &self,
        validations: &[ValidationRecord],
        result_type: ResultType,
        now: DateTime<Utc>,
    ) -> Result<ChartConfig, TrendChartError>;
}

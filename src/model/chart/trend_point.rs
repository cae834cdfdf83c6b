use crate::common::*;

/* color tokens applied per point, keyed on the run's pass/fail outcome */
pub const SUCCESS_COLOR: &str = "#3f8600";
pub const FAILURE_COLOR: &str = "#cf1322";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointColor {
    Pass,
    Fail,
}

impl PointColor {
    pub fn from_success(success: bool) -> Self {
        if success {
            PointColor::Pass
        } else {
            PointColor::Fail
        }
    }

    pub fn as_color_token(&self) -> &'static str {
        match self {
            PointColor::Pass => SUCCESS_COLOR,
            PointColor::Fail => FAILURE_COLOR,
        }
    }
}

#[doc = "One pass-rate point: timestamp, normalized value, pass/fail color"]
#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct TrendPoint {
    pub x: String,
    pub y: f64,
    pub color: PointColor,
}

#[doc = "One SLA point; `y` of None means no SLA was configured for that run"]
#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct SlaPoint {
    pub x: String,
    pub y: Option<f64>,
}

#[doc = r#"
    Output of the series builder.

    Invariant: both vectors have one entry per input validation record and are
    index-aligned on the record's `run_date`.
"#]
#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct TrendSeries {
    pub percentage_values: Vec<TrendPoint>,
    pub sla_values: Vec<SlaPoint>,
}

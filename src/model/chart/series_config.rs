use crate::common::*;

pub const SLA_LINE_COLOR: &str = "#bfbfbf";
pub const PASS_RATE_LINE_COLOR: &str = "#333333";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyleConfig {
    pub color: String,
    pub width: f64,
    #[serde(rename = "type")]
    pub line_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStyleConfig {
    pub color: String,
}

#[doc = "One data entry of a line series; `y` of None leaves a gap in the line"]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDataEntry {
    pub value: (String, Option<f64>),
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyleConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkLineLabelConfig {
    pub position: String,
    pub formatter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkLineEntry {
    pub name: String,
    pub y_axis: f64,
}

#[doc = r#"
    Horizontal SLA reference line.

    The carrying series renders the line itself transparent - only the label
    and marker position matter, the dashed SLA data series already shows the
    threshold history.
"#]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkLineConfig {
    pub silent: bool,
    pub symbol: String,
    pub line_style: LineStyleConfig,
    pub label: MarkLineLabelConfig,
    pub data: Vec<MarkLineEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub series_type: String,
    pub silent: bool,
    pub symbol: String,
    pub line_style: LineStyleConfig,
    pub data: Vec<SeriesDataEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_line: Option<MarkLineConfig>,
}

impl SeriesConfig {
    #[doc = "Dashed thin gray non-interactive line carrying the SLA history"]
    pub fn sla_line(data: Vec<SeriesDataEntry>) -> Self {
        SeriesConfig {
            name: "SLA".to_string(),
            series_type: "line".to_string(),
            silent: true,
            symbol: "none".to_string(),
            line_style: LineStyleConfig {
                color: SLA_LINE_COLOR.to_string(),
                width: 1.0,
                line_type: "dashed".to_string(),
            },
            data,
            mark_line: None,
        }
    }

    #[doc = "Solid dark pass-rate line, optionally carrying the SLA marker"]
    pub fn pass_rate_line(data: Vec<SeriesDataEntry>, mark_line: Option<MarkLineConfig>) -> Self {
        SeriesConfig {
            name: "Pass Rate".to_string(),
            series_type: "line".to_string(),
            silent: false,
            symbol: "none".to_string(),
            line_style: LineStyleConfig {
                color: PASS_RATE_LINE_COLOR.to_string(),
                width: 2.0,
                line_type: "solid".to_string(),
            },
            data,
            mark_line,
        }
    }
}

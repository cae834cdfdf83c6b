use crate::common::*;

use crate::model::chart::{axis_config::*, series_config::*};

#[doc = "Sparkline margins: tight top/bottom, room for axis labels on both sides"]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
    pub contain_label: bool,
}

impl GridConfig {
    pub fn sparkline() -> Self {
        GridConfig {
            top: "10%".to_string(),
            bottom: "10%".to_string(),
            left: "40".to_string(),
            right: "40".to_string(),
            contain_label: true,
        }
    }
}

#[doc = r#"
    Tooltip placement: horizontally centered on the cursor, vertically pinned
    near the top of the chart area at a fixed percentage offset.
"#]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipPositionConfig {
    pub follow_cursor_x: bool,
    pub top_percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipConfig {
    pub trigger: String,
    pub position: TooltipPositionConfig,
}

impl TooltipConfig {
    pub fn axis_triggered() -> Self {
        TooltipConfig {
            trigger: "axis".to_string(),
            position: TooltipPositionConfig {
                follow_cursor_x: true,
                top_percent: 10,
            },
        }
    }
}

#[doc = r#"
    The fully assembled, renderer-agnostic chart configuration.

    Produced fresh on every invocation from the validation records and the
    caller-supplied render time; the external charting collaborator does all
    drawing.
"#]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub grid: GridConfig,
    pub x_axis: XAxisConfig,
    pub y_axis: YAxisConfig,
    pub tooltip: TooltipConfig,
    pub series: Vec<SeriesConfig>,
    pub animation: bool,
}

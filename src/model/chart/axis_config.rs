use crate::common::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowFlag {
    pub show: bool,
}

impl ShowFlag {
    pub fn shown() -> Self {
        ShowFlag { show: true }
    }

    pub fn hidden() -> Self {
        ShowFlag { show: false }
    }
}

#[doc = r#"
    Rolling time X-axis.

    `min`/`max` hold the 7-day window bounds computed at render time; every
    visual decoration of the axis is hidden so the chart reads as an inline
    sparkline.
"#]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxisConfig {
    #[serde(rename = "type")]
    pub axis_type: String,
    pub min: String,
    pub max: String,
    pub axis_line: ShowFlag,
    pub axis_label: ShowFlag,
    pub axis_tick: ShowFlag,
    pub split_line: ShowFlag,
}

impl XAxisConfig {
    pub fn rolling_time_window(min: String, max: String) -> Self {
        XAxisConfig {
            axis_type: "time".to_string(),
            min,
            max,
            axis_line: ShowFlag::hidden(),
            axis_label: ShowFlag::hidden(),
            axis_tick: ShowFlag::hidden(),
            split_line: ShowFlag::hidden(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabelConfig {
    pub formatter: String,
}

#[doc = r#"
    Y-axis policy, selected from the expectation's result type.

    Percentage-based result types get fixed `[0,100]` bounds with a single
    tick interval and `%`-suffixed labels; everything else is an unbounded
    numeric axis with two suggested splits. Both variants keep the axis line
    visible, drop split lines/ticks, and rescale to fit the data.
"#]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxisConfig {
    #[serde(rename = "type")]
    pub axis_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_number: Option<u32>,
    pub scale: bool,
    pub axis_label: AxisLabelConfig,
    pub axis_line: ShowFlag,
    pub axis_tick: ShowFlag,
    pub split_line: ShowFlag,
}

impl YAxisConfig {
    pub fn percentage_bounded() -> Self {
        YAxisConfig {
            axis_type: "value".to_string(),
            min: Some(0.0),
            max: Some(100.0),
            interval: Some(100.0),
            split_number: None,
            scale: true,
            axis_label: AxisLabelConfig {
                formatter: "{value}%".to_string(),
            },
            axis_line: ShowFlag::shown(),
            axis_tick: ShowFlag::hidden(),
            split_line: ShowFlag::hidden(),
        }
    }

    pub fn unbounded_numeric() -> Self {
        YAxisConfig {
            axis_type: "value".to_string(),
            min: None,
            max: None,
            interval: None,
            split_number: Some(2),
            scale: true,
            axis_label: AxisLabelConfig {
                formatter: "{value}".to_string(),
            },
            axis_line: ShowFlag::shown(),
            axis_tick: ShowFlag::hidden(),
            split_line: ShowFlag::hidden(),
        }
    }
}

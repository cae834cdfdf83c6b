pub mod axis_config;
pub mod chart_config;
pub mod series_config;
pub mod trend_point;

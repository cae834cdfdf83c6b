pub mod query_service;
pub mod trend_chart_service;

pub mod query_service_impl;
pub mod trend_chart_service_impl;

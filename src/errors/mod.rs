pub mod trend_error;

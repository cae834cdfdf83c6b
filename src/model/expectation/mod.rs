pub mod expectation_list_config;
pub mod watched_expectation;

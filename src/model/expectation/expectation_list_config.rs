use crate::common::*;

use crate::model::expectation::watched_expectation::*;

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ExpectationListConfig {
    pub expectation: Vec<WatchedExpectation>,
}

use crate::common::*;

#[doc = "One expectation whose validation trend is charted each cycle"]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct WatchedExpectation {
    pub expectation_id: String,
    pub result_type: String,
}

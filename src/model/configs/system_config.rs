use crate::common::*;

#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct SystemConfig {
    pub validation_index_name: String,
    pub chart_output_dir: String,
    pub ticker_sec: u64,
}

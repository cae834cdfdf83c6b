use crate::common::*;

use crate::dto::validation_record::*;

use crate::utils_modules::traits::*;

#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ValidationSearchResult {
    pub doc_id: String,
    pub record: ValidationRecord,
}

impl FromSearchHit<ValidationRecord> for ValidationSearchResult {
    fn from_search_hit(doc_id: String, record: ValidationRecord) -> Self {
        ValidationSearchResult::new(doc_id, record)
    }
}

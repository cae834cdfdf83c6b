use crate::common::*;

use crate::dto::validation_record::*;

#[async_trait]
pub trait QueryService {
    async fn get_validations_by_expectation(
        &self,
        validation_index_name: &str,
        expectation_id: &str,
        gte: DateTime<Utc>,
        lte: DateTime<Utc>,
    ) -> anyhow::Result<Vec<ValidationRecord>>;
}

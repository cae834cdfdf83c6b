use crate::common::*;

#[async_trait]
pub trait EsRepository: Send + Sync {
    async fn get_search_query(
        &self,
        es_query: &Value,
        index_name: &str,
    ) -> Result<Value, anyhow::Error>;
}

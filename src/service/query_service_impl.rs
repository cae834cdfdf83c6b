use crate::common::*;

use crate::traits::{repository_traits::es_repository::*, service_traits::query_service::*};

use crate::repository::es_repository_impl::*;

use crate::utils_modules::{time_utils::*, traits::*};

use crate::dto::{validation_record::*, validation_search_result::*};

#[derive(Debug, new)]
pub struct QueryServiceImpl {
    es_conn: Arc<EsRepositoryImpl>,
}

impl QueryServiceImpl {
    #[doc = r#"
        Parses an Elasticsearch search response into a vector of structured
        objects.

        1. Extract the `hits.hits` array from the response
        2. Split each hit into `_id` and `_source`
        3. Deserialize `_source` into the source type `S`
        4. Convert into the final type `T` through `FromSearchHit`

        # Type Parameters
        * `T` - final object type (implements `FromSearchHit`)
        * `S` - deserialization type of the `_source` field

        # Arguments
        * `response_body` - Elasticsearch search response JSON

        # Returns
        * `Vec<T>` - converted objects
        * `anyhow::Error` - on a missing field or a deserialization failure
    "#]
    fn get_query_result_vec<T, S>(&self, response_body: &Value) -> Result<Vec<T>, anyhow::Error>
    where
        S: DeserializeOwned,
        T: FromSearchHit<S>,
    {
        let hits: &Value = response_body
            .get("hits")
            .and_then(|h| h.get("hits"))
            .ok_or_else(|| {
                anyhow!("[QueryServiceImpl->get_query_result_vec] Missing 'hits.hits' field")
            })?;

        let arr: &Vec<Value> = hits.as_array().ok_or_else(|| {
            anyhow!("[QueryServiceImpl->get_query_result_vec] 'hits.hits' is not an array")
        })?;

        /* doc_id + source deserialization → T */
        let results: Vec<T> = arr
            .iter()
            .map(|hit| {
                let id: String = hit
                    .get("_id")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| {
                        anyhow!("[QueryServiceImpl->get_query_result_vec] Missing or invalid '_id'")
                    })?
                    .to_string();

                let src_val: &Value = hit.get("_source").ok_or_else(|| {
                    anyhow!("[QueryServiceImpl->get_query_result_vec] Missing '_source'")
                })?;

                let source: S = serde_json::from_value(src_val.to_owned()).map_err(|e| {
                    anyhow!(
                        "[QueryServiceImpl->get_query_result_vec] Failed to deserialize source: {}",
                        e
                    )
                })?;

                Ok::<T, anyhow::Error>(T::from_search_hit(id, source))
            })
            .collect::<Result<_, _>>()?;
        Ok(results)
    }
}

#[async_trait]
impl QueryService for QueryServiceImpl {
    #[doc = r#"
        Fetches one expectation's validation runs within a time window,
        oldest first.

        The query filters on the run time range and the expectation id and
        sorts ascending by run date so the chart input is chronological.

        # Arguments
        * `validation_index_name` - index storing validation documents
        * `expectation_id` - expectation whose runs are fetched
        * `gte` / `lte` - inclusive time window bounds

        # Returns
        * `Vec<ValidationRecord>` - chronologically ordered validation runs
    "#]
    async fn get_validations_by_expectation(
        &self,
        validation_index_name: &str,
        expectation_id: &str,
        gte: DateTime<Utc>,
        lte: DateTime<Utc>,
    ) -> anyhow::Result<Vec<ValidationRecord>> {
        let query: Value = json!({
            "size": 2000,
            "query": {
                "bool": {
                    "must": [
                        {
                            "range": {
                                "run_date": {
                                    "gte": convert_date_to_str(gte, Utc),
                                    "lte": convert_date_to_str(lte, Utc)
                                }
                            }
                        },
                        {
                            "match": {
                                "expectation_id": expectation_id
                            }
                        }
                    ]
                }
            },
            "sort": [{ "run_date": "asc" }]
        });

        let response_body: Value = self
            .es_conn
            .get_search_query(&query, validation_index_name)
            .await?;

        let search_results: Vec<ValidationSearchResult> =
            self.get_query_result_vec::<ValidationSearchResult, ValidationRecord>(&response_body)?;

        Ok(search_results
            .into_iter()
            .map(|result| result.record)
            .collect())
    }
}

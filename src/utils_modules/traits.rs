use crate::common::*;

/* Elasticsearch hit → domain type conversion */
pub trait FromSearchHit<S>
where
    S: DeserializeOwned,
{
    fn from_search_hit(doc_id: String, source: S) -> Self;
}

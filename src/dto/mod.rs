pub mod validation_record;
pub mod validation_search_result;

pub mod result_type;

pub mod elastic_server_config;
pub mod system_config;
pub mod total_config;

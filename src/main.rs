mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::es_repository_impl::*;

mod env_configuration;

mod errors;

mod enums;

mod traits;

mod model;
use model::configs::total_config::*;

mod dto;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{query_service_impl::*, trend_chart_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* global logger + environment */
    dotenv().ok();
    set_global_logger();

    info!("Expectation trend tracking start!");

    /* Elasticsearch connection to the validation store */
    let es_conn: EsRepositoryImpl =
        EsRepositoryImpl::new(get_elastic_config_info()).unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing es_conn.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* dependency injection */
    let query_service: QueryServiceImpl = QueryServiceImpl::new(Arc::new(es_conn));
    let trend_chart_service: TrendChartServiceImpl = TrendChartServiceImpl::new();

    let main_controller: MainController<QueryServiceImpl, TrendChartServiceImpl> =
        MainController::new(query_service, trend_chart_service);

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
